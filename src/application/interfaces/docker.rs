use crate::error::AppError;
use crate::presentation::container::{ContainerCommand, ContainerLogs, LogsOptions};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for Docker operations proxied by Portainer for one endpoint
///
/// `endpoint_id` identifies a managed environment. Responses are returned as
/// decoded JSON, without shape validation.
#[async_trait]
pub trait DockerService: Send + Sync {
    /// Gets the Docker daemon info of an endpoint
    async fn docker_info(&self, endpoint_id: u32) -> Result<Value, AppError>;

    /// Lists every container, running or stopped (`all=1`)
    async fn docker_containers(&self, endpoint_id: u32) -> Result<Vec<Value>, AppError>;

    /// Lists running containers only (`all=0`)
    async fn docker_containers_running(&self, endpoint_id: u32) -> Result<Vec<Value>, AppError>;

    /// Gets the full inspect document of a container
    async fn docker_container_info(
        &self,
        endpoint_id: u32,
        container_id: &str,
    ) -> Result<Value, AppError>;

    /// Gets a single, non-streaming resource usage snapshot of a container
    async fn docker_container_stats(
        &self,
        endpoint_id: u32,
        container_id: &str,
    ) -> Result<Value, AppError>;

    /// Posts a sub-command against a container
    ///
    /// # Arguments
    /// * `command` - Known command, or [`ContainerCommand::Raw`] for anything else
    /// * `options` - JSON object sent as query parameters or as the body, depending
    ///   on [`ContainerCommand::options_location`]; `null` sends nothing
    ///
    /// # Returns
    /// * The decoded response, `null` for empty bodies
    async fn docker_container_command(
        &self,
        endpoint_id: u32,
        container_id: &str,
        command: ContainerCommand,
        options: &Value,
    ) -> Result<Value, AppError>;

    /// Gets container logs
    ///
    /// Containers without a TTY answer with the multiplexed stdout/stderr stream,
    /// which is split per stream. TTY containers answer with plain output, returned
    /// as stdout.
    async fn docker_container_logs(
        &self,
        endpoint_id: u32,
        container_id: &str,
        options: &LogsOptions,
    ) -> Result<ContainerLogs, AppError>;

    /// Lists every container of a Compose stack
    async fn stack_containers(
        &self,
        endpoint_id: u32,
        stack_name: &str,
    ) -> Result<Vec<Value>, AppError>;
}
