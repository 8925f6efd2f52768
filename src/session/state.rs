/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use crate::session::headers::HeaderSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authentication state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No token has been obtained or injected yet
    Unauthenticated,
    /// A bearer token is attached to outgoing requests
    Authenticated,
}

/// Authentication state for one logical connection to a Portainer server
///
/// The token cannot be cleared; a fresh client starts a fresh session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Current bearer token
    pub auth_token: Option<String>,
    /// Headers attached to every authenticated request
    pub headers: HeaderSet,
    /// When the current token was stored
    pub authenticated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates an unauthenticated session with no headers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `token` and makes it the only bearer header
    pub fn set_token(&mut self, token: &str) {
        self.auth_token = Some(token.to_string());
        self.headers.set_bearer(token);
        self.authenticated_at = Some(Utc::now());
    }

    /// Current state of the session
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.auth_token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// True once a token has been obtained or injected
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }
}
