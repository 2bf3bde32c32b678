pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, HiredeskError};
pub use events::{Event, EventBus};
pub use id::new_correlation_id;
