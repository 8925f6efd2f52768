/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/

//! Authentication module for the Portainer API
//!
//! This module obtains and maintains the bearer token used by every request:
//! - `authenticate` / `login` exchange credentials for a JWT on `POST auth`
//! - `set_auth_token` injects a token obtained earlier (e.g. persisted)
//!
//! Both paths go through [`Session::set_token`], which keeps exactly one
//! `Authorization: Bearer` header in the shared header set.

use crate::constants::{AUTH_PATH, BEARER_SCHEME};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::AuthRequest;
use crate::model::responses::AuthResponse;
use crate::session::{Session, SessionState};
use reqwest::header::HeaderValue;
use std::sync::Arc;
use tracing::{debug, info};

/// Authentication manager for the Portainer API
///
/// Holds the same [`HttpClient`] as every resource handle of its client, so a token
/// change is visible to handles obtained before it.
#[derive(Clone)]
pub struct Auth {
    http: Arc<HttpClient>,
}

impl Auth {
    /// Creates an authentication manager over a shared executor
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Alias of [`Auth::authenticate`]
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        self.authenticate(username, password).await
    }

    /// Exchanges credentials for a bearer token and stores it in the session
    ///
    /// # Returns
    /// * `Ok(String)` - The token now attached to every request
    /// * `Err(AppError::Authentication)` - If the response carries no usable `jwt`
    /// * `Err(AppError)` - Transport or HTTP errors, unmodified
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AppError> {
        debug!("Sending authentication request for user {}", username);

        let response: AuthResponse = self
            .http
            .post_unauthenticated(AUTH_PATH, &AuthRequest::new(username, password))
            .await?;
        let token = response.into_token()?;
        validate_token(&token).map_err(|e| AppError::Authentication(e.to_string()))?;

        self.http.session().write().await.set_token(&token);

        info!("✓ Authenticated as {}", username);
        Ok(token)
    }

    /// Replaces the session token with `token`
    ///
    /// Every stale bearer header is removed before exactly one new one is appended,
    /// so calling this twice with the same token is a no-op the second time.
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If `token` is empty or cannot be sent as a header
    pub async fn set_auth_token(&self, token: &str) -> Result<(), AppError> {
        validate_token(token)?;
        self.http.session().write().await.set_token(token);
        info!("✓ Auth token set");
        Ok(())
    }

    /// Current bearer token, if any
    pub async fn auth_token(&self) -> Option<String> {
        self.http.session().read().await.auth_token.clone()
    }

    /// Snapshot of the current session
    pub async fn get_session(&self) -> Session {
        self.http.session().read().await.clone()
    }

    /// Current authentication state
    pub async fn state(&self) -> SessionState {
        self.http.session().read().await.state()
    }
}

/// Rejects tokens that would produce an empty or unsendable header
pub(crate) fn validate_token(token: &str) -> Result<(), AppError> {
    if token.trim().is_empty() {
        return Err(AppError::InvalidInput("auth token is empty".to_string()));
    }
    HeaderValue::from_str(&format!("{BEARER_SCHEME} {token}"))
        .map(|_| ())
        .map_err(|_| {
            AppError::InvalidInput("auth token contains invalid header characters".to_string())
        })
}
