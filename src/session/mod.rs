/// Outgoing header collection with the single-bearer invariant
pub mod headers;
/// Authentication state of one connection to a Portainer server
pub mod state;

pub use headers::{Header, HeaderSet};
pub use state::{Session, SessionState};
