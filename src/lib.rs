/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/

//! # Portainer Client
//!
//! A thin asynchronous client for the Portainer HTTP management API.
//!
//! The crate covers three concerns:
//! - **Session**: acquiring a bearer token (`auth`) or injecting a stored one, and keeping
//!   exactly one `Authorization: Bearer` header in the shared header set.
//! - **Resources**: lightweight path handles (`registries`, `stacks`, `users`, ...) offering
//!   generic list/get/create/update/delete calls.
//! - **Docker**: endpoint-scoped operations proxied by Portainer to the Docker daemon
//!   (info, container listing, inspect, stats, commands, stack containers).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use portainer_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::new(Config::with_base_url("https://portainer.local:9443/api"))?;
//! client.authenticate("admin", "secret").await?;
//!
//! let running = client.docker_containers_running(1).await?;
//! for container in running {
//!     println!("{}", container["Id"]);
//! }
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, authentication, resource handles and the client facade
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models plus the HTTP request executor
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain types exposed to callers (container commands, log options)
pub mod presentation;
/// Header set and session state
pub mod session;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
