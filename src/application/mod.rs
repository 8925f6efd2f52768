/// Authentication and bearer-token management
pub mod auth;
/// Client facade over the Portainer API
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
/// Generic REST resource handles
pub mod resource;
