//! Session state and the collaborators the fetchers consume.
//!
//! The fetchers only ever read sessions through a [`SessionProvider`];
//! mutation happens in the [`SessionStore`], driven by providers (token
//! rotation) and by [`SignOut`] implementations.

mod jwt;
mod oauth;
mod provider;
mod signout;
mod store;
mod types;

pub use jwt::token_expiry;
pub use oauth::OAuthSessionProvider;
pub use provider::{SessionProvider, StaticSessionProvider};
pub use signout::{LocalSignOut, SignOut};
pub use store::SessionStore;
pub use types::{Session, UserProfile};
