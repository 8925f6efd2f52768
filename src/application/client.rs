/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::docker::DockerService;
use crate::application::interfaces::resources::PortainerResources;
use crate::application::resource::ResourcePath;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ContainerListQuery, StatsQuery, query_pairs};
use crate::presentation::container::{
    ContainerCommand, ContainerLogs, LogsOptions, OptionsLocation,
};
use crate::session::{Session, SessionState};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the Portainer HTTP API
///
/// Cloning is cheap and clones share the session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
    auth: Auth,
}

impl Client {
    /// Creates a client without authenticating
    ///
    /// A token present in `config.credentials.token` is attached immediately.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        let auth = Auth::new(http_client.clone());
        Ok(Self { http_client, auth })
    }

    /// Creates a client from the environment (see [`Config::new`])
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Alias of [`Client::authenticate`]
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        self.auth.login(username, password).await
    }

    /// Authenticates against `POST auth` and attaches the returned token
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, AppError> {
        self.auth.authenticate(username, password).await
    }

    /// Authenticates with the configured credentials
    ///
    /// Username and password win over a configured token. With only a token, the
    /// session already carries it and it is returned as-is.
    pub async fn login_with_config(&self) -> Result<String, AppError> {
        let credentials = &self.http_client.config().credentials;
        if credentials.has_login() {
            return self
                .auth
                .authenticate(&credentials.username, &credentials.password)
                .await;
        }
        match self.auth.auth_token().await {
            Some(token) => {
                debug!("No credentials configured, keeping configured token");
                Ok(token)
            }
            None => Err(AppError::Config(
                "no credentials or token configured".to_string(),
            )),
        }
    }

    /// Replaces the bearer token used by this client and all its handles
    pub async fn set_auth_token(&self, token: &str) -> Result<(), AppError> {
        self.auth.set_auth_token(token).await
    }

    /// Current bearer token, if any
    pub async fn auth_token(&self) -> Option<String> {
        self.auth.auth_token().await
    }

    /// Snapshot of the current session
    pub async fn get_session(&self) -> Session {
        self.auth.get_session().await
    }

    /// Current authentication state
    pub async fn state(&self) -> SessionState {
        self.auth.state().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the underlying request executor
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Handle on an arbitrary resource path
    pub fn resource(&self, path: impl Into<String>) -> ResourcePath {
        ResourcePath::new(self.http_client.clone(), path)
    }
}

impl PortainerResources for Client {
    fn registries(&self) -> ResourcePath {
        self.resource("registries")
    }

    fn endpoints(&self) -> ResourcePath {
        self.resource("endpoints")
    }

    fn stacks(&self) -> ResourcePath {
        self.resource("stacks")
    }

    fn users(&self) -> ResourcePath {
        self.resource("users")
    }

    fn teams(&self) -> ResourcePath {
        self.resource("teams")
    }
}

fn docker_path(endpoint_id: u32, rest: &str) -> String {
    format!("endpoints/{endpoint_id}/docker/{rest}")
}

/// Container ids and names as Docker accepts them: `[a-zA-Z0-9][a-zA-Z0-9_.-]*`
fn is_valid_container_id(container_id: &str) -> bool {
    let mut chars = container_id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

fn container_path(endpoint_id: u32, container_id: &str, rest: &str) -> Result<String, AppError> {
    if !is_valid_container_id(container_id) {
        return Err(AppError::InvalidInput(format!(
            "invalid container id {container_id:?}"
        )));
    }
    Ok(docker_path(
        endpoint_id,
        &format!("containers/{container_id}/{rest}"),
    ))
}

#[async_trait]
impl DockerService for Client {
    async fn docker_info(&self, endpoint_id: u32) -> Result<Value, AppError> {
        self.http_client.get(&docker_path(endpoint_id, "info")).await
    }

    async fn docker_containers(&self, endpoint_id: u32) -> Result<Vec<Value>, AppError> {
        self.http_client
            .get_with_query(
                &docker_path(endpoint_id, "containers/json"),
                &ContainerListQuery::all(),
            )
            .await
    }

    async fn docker_containers_running(&self, endpoint_id: u32) -> Result<Vec<Value>, AppError> {
        self.http_client
            .get_with_query(
                &docker_path(endpoint_id, "containers/json"),
                &ContainerListQuery::running(),
            )
            .await
    }

    async fn docker_container_info(
        &self,
        endpoint_id: u32,
        container_id: &str,
    ) -> Result<Value, AppError> {
        let path = container_path(endpoint_id, container_id, "json")?;
        self.http_client.get(&path).await
    }

    async fn docker_container_stats(
        &self,
        endpoint_id: u32,
        container_id: &str,
    ) -> Result<Value, AppError> {
        let path = container_path(endpoint_id, container_id, "stats")?;
        self.http_client
            .get_with_query(&path, &StatsQuery::snapshot())
            .await
    }

    async fn docker_container_command(
        &self,
        endpoint_id: u32,
        container_id: &str,
        command: ContainerCommand,
        options: &Value,
    ) -> Result<Value, AppError> {
        let path = container_path(endpoint_id, container_id, command.as_str())?;
        info!("Container {} on endpoint {}: {}", container_id, endpoint_id, command);

        match command.options_location() {
            OptionsLocation::Query => {
                let query = query_pairs(options)?;
                self.http_client
                    .request(Method::POST, &path, Some(&query), None::<&()>)
                    .await
            }
            OptionsLocation::Body => {
                let body = match options {
                    Value::Null => Value::Object(Default::default()),
                    other => other.clone(),
                };
                self.http_client
                    .request(Method::POST, &path, None::<&()>, Some(&body))
                    .await
            }
        }
    }

    async fn docker_container_logs(
        &self,
        endpoint_id: u32,
        container_id: &str,
        options: &LogsOptions,
    ) -> Result<ContainerLogs, AppError> {
        let path = container_path(endpoint_id, container_id, "logs")?;
        let raw = self
            .http_client
            .request_bytes(Method::GET, &path, Some(options))
            .await?;
        Ok(ContainerLogs::from_bytes(&raw))
    }

    async fn stack_containers(
        &self,
        endpoint_id: u32,
        stack_name: &str,
    ) -> Result<Vec<Value>, AppError> {
        let query = ContainerListQuery::for_stack(stack_name)?;
        debug!("Listing containers of stack {}", stack_name);
        self.http_client
            .get_with_query(&docker_path(endpoint_id, "containers/json"), &query)
            .await
    }
}
