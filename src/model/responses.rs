/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Response of `POST auth`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Bearer token issued by Portainer
    #[serde(default)]
    pub jwt: Option<String>,
}

impl AuthResponse {
    /// Returns the token, failing when Portainer did not send a non-empty `jwt`
    pub fn into_token(self) -> Result<String, AppError> {
        match self.jwt {
            Some(token) if !token.trim().is_empty() => Ok(token),
            Some(_) => Err(AppError::Authentication(
                "empty jwt in authentication response".to_string(),
            )),
            None => Err(AppError::Authentication(
                "missing jwt in authentication response".to_string(),
            )),
        }
    }
}
