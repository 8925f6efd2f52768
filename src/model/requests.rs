/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use crate::constants::COMPOSE_PROJECT_LABEL;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST auth`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AuthRequest<'a> {
    /// Portainer username
    pub username: &'a str,
    /// Portainer password
    pub password: &'a str,
}

impl<'a> AuthRequest<'a> {
    /// Creates the request body
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }
}

/// Docker container list filters, sent JSON-encoded in the `filters` query parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerFilters {
    /// Label filters, each `key` or `key=value`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label: Vec<String>,
}

impl ContainerFilters {
    /// Filters containers belonging to the Compose project (stack) `stack_name`
    pub fn for_stack(stack_name: &str) -> Self {
        Self {
            label: vec![format!("{COMPOSE_PROJECT_LABEL}={stack_name}")],
        }
    }

    /// Adds a label filter
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label.push(label.into());
        self
    }

    /// Encodes the filters as the JSON document Docker expects
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Query of `GET endpoints/{id}/docker/containers/json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContainerListQuery {
    /// `1` lists stopped containers too, `0` only running ones
    pub all: u8,
    /// Streaming flag, only sent for stack listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// JSON-encoded [`ContainerFilters`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
}

impl ContainerListQuery {
    /// Every container, running or stopped
    #[must_use]
    pub fn all() -> Self {
        Self {
            all: 1,
            ..Self::default()
        }
    }

    /// Running containers only
    #[must_use]
    pub fn running() -> Self {
        Self {
            all: 0,
            ..Self::default()
        }
    }

    /// Every container of the stack `stack_name`
    pub fn for_stack(stack_name: &str) -> Result<Self, AppError> {
        Ok(Self {
            all: 1,
            stream: Some(false),
            filters: Some(ContainerFilters::for_stack(stack_name).to_json()?),
        })
    }
}

/// Query of `GET endpoints/{id}/docker/containers/{cid}/stats`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsQuery {
    /// Always false: a single snapshot is requested
    pub stream: bool,
}

impl StatsQuery {
    /// A single, non-streaming snapshot
    #[must_use]
    pub fn snapshot() -> Self {
        Self { stream: false }
    }
}

/// Flattens a JSON object of command options into query pairs
///
/// Strings are sent as-is, numbers and booleans in their JSON spelling, nested
/// arrays and objects JSON-encoded (the way Docker takes `filters`), and nulls are
/// dropped. `null` or an empty object yield no pairs.
pub fn query_pairs(options: &Value) -> Result<Vec<(String, String)>, AppError> {
    let map = match options {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(AppError::InvalidInput(format!(
                "command options must be a JSON object, got {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let encoded = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            nested @ (Value::Array(_) | Value::Object(_)) => serde_json::to_string(nested)?,
        };
        pairs.push((key.clone(), encoded));
    }
    Ok(pairs)
}
