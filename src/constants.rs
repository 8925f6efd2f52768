/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
/// User agent string sent with every request to identify this client to Portainer
pub const USER_AGENT: &str = concat!("portainer-client/", env!("CARGO_PKG_VERSION"));
/// Base URL used when `PORTAINER_URL` is not configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000/api";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Name of the header carrying the bearer token
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Scheme prefix of the authorization header value
pub const BEARER_SCHEME: &str = "Bearer";
/// Path of the authentication endpoint, relative to the API base URL
pub const AUTH_PATH: &str = "auth";
/// Docker label set by Compose on every container of a project (stack)
pub const COMPOSE_PROJECT_LABEL: &str = "com.docker.compose.project";
