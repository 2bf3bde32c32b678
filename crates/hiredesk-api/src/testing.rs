//! In-memory fakes for the transport, session and sign-out seams.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::session::{Session, SessionProvider, SignOut};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::{FetchError, SessionError};

type Handler = Box<dyn Fn(&ApiRequest) -> Result<ApiResponse, FetchError> + Send + Sync>;

pub(crate) fn response(status: u16, body: &str) -> ApiResponse {
    ApiResponse::new(
        StatusCode::from_u16(status).unwrap(),
        HeaderMap::new(),
        body.as_bytes().to_vec(),
    )
}

/// Transport that answers through a handler and records every request.
pub(crate) struct RecordingTransport {
    handler: Handler,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub(crate) fn new(
        handler: impl Fn(&ApiRequest) -> Result<ApiResponse, FetchError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Answer with `statuses` in order; a network error once they run out.
    pub(crate) fn scripted(statuses: Vec<u16>) -> Arc<Self> {
        let queue = Mutex::new(VecDeque::from(statuses));
        Self::new(move |_| match queue.lock().unwrap().pop_front() {
            Some(status) => Ok(response(status, "")),
            None => Err(FetchError::NetworkError("script exhausted".into())),
        })
    }

    /// Always answer `status` with a JSON body.
    pub(crate) fn json(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| Ok(response(status, &body)))
    }

    /// 200 for `Bearer <valid>`, 401 for anything else.
    pub(crate) fn accepting(valid: &str) -> Arc<Self> {
        let expected = format!("Bearer {valid}");
        Self::new(move |req| {
            if req.header_str("authorization") == Some(expected.as_str()) {
                Ok(response(200, "ok"))
            } else {
                Ok(response(401, ""))
            }
        })
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Authorization header of every recorded request, in order.
    pub(crate) fn authorizations(&self) -> Vec<Option<String>> {
        self.requests()
            .iter()
            .map(|r| r.header_str("authorization").map(String::from))
            .collect()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, FetchError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(request)
    }
}

/// Session provider with a scripted sequence of refresh outcomes.
pub(crate) struct FakeSessions {
    current: Mutex<Session>,
    refreshes: Mutex<VecDeque<Result<Session, SessionError>>>,
    refresh_delay: Option<Duration>,
    refresh_calls: AtomicUsize,
    current_calls: AtomicUsize,
}

impl FakeSessions {
    pub(crate) fn new(current: Session) -> Self {
        Self {
            current: Mutex::new(current),
            refreshes: Mutex::new(VecDeque::new()),
            refresh_delay: None,
            refresh_calls: AtomicUsize::new(0),
            current_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_token(token: &str) -> Self {
        Self::new(Session::with_token(token))
    }

    pub(crate) fn then_refresh(self, outcome: Result<Session, SessionError>) -> Self {
        self.refreshes.lock().unwrap().push_back(outcome);
        self
    }

    pub(crate) fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = Some(delay);
        self
    }

    pub(crate) fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn current_calls(&self) -> usize {
        self.current_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for FakeSessions {
    async fn current_session(&self) -> Session {
        self.current_calls.fetch_add(1, Ordering::SeqCst);
        self.current.lock().unwrap().clone()
    }

    async fn refresh_session(&self) -> Result<Session, SessionError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.refresh_delay {
            tokio::time::sleep(delay).await;
        }
        let outcome = self
            .refreshes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SessionError::NoRefreshToken));
        if let Ok(ref session) = outcome {
            *self.current.lock().unwrap() = session.clone();
        }
        outcome
    }
}

/// Sign-out action that only counts calls.
#[derive(Default)]
pub(crate) struct CountingSignOut {
    redirects: Mutex<Vec<String>>,
    fail: bool,
}

impl CountingSignOut {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.redirects.lock().unwrap().len()
    }

    pub(crate) fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignOut for CountingSignOut {
    async fn force_sign_out(&self, redirect_to: &str) -> Result<(), SessionError> {
        self.redirects.lock().unwrap().push(redirect_to.to_string());
        if self.fail {
            return Err(SessionError::SignOutFailed("session endpoint unreachable".into()));
        }
        Ok(())
    }
}
