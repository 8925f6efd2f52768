use portainer_client::prelude::*;

/// Client pointed at a mock server, with no credentials
pub fn client_for(url: &str) -> Client {
    Client::new(Config::with_base_url(url)).expect("client should build")
}

/// JSON response body helper
pub const JSON: &str = "application/json";
