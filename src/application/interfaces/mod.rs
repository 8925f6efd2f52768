/// Endpoint-scoped Docker operations
pub mod docker;
/// Portainer resource handles
pub mod resources;
