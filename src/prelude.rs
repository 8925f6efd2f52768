/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/

//! # Portainer Client Prelude
//!
//! Brings the commonly used types and traits into scope with a single import.
//!
//! ```rust
//! use portainer_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:9000/api");
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.stacks().path(), "stacks");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND SESSION
// ============================================================================

pub use crate::application::auth::Auth;
pub use crate::application::client::Client;
pub use crate::model::http::HttpClient;
pub use crate::session::{Header, HeaderSet, Session, SessionState};

// ============================================================================
// SERVICES AND RESOURCES
// ============================================================================

pub use crate::application::interfaces::docker::DockerService;
pub use crate::application::interfaces::resources::PortainerResources;
pub use crate::application::resource::ResourcePath;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{AuthRequest, ContainerFilters, ContainerListQuery, StatsQuery};
pub use crate::model::responses::AuthResponse;
pub use crate::presentation::container::{
    ContainerCommand, ContainerLogs, LogsOptions, OptionsLocation,
};

// ============================================================================
// CONSTANTS
// ============================================================================

pub use crate::constants::*;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
