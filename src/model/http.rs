/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/

use crate::application::auth::validate_token;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::{HeaderSet, Session};
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error};

/// Request executor bound to one Portainer server and one session
///
/// Every resource handle and facade call of a client goes through the same
/// `HttpClient`, so they all see the same session. Each request sends a snapshot of
/// the session headers taken when the request starts.
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    base_url: Url,
    session: Arc<RwLock<Session>>,
}

impl HttpClient {
    /// Creates an executor for `config`
    ///
    /// A token present in the configuration is injected into the session right away.
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to issue requests
    /// * `Err(AppError::Config)` - If the base URL is not a valid URL
    /// * `Err(AppError::InvalidInput)` - If the configured token is blank or not a valid
    ///   header value
    /// * `Err(AppError::Network)` - If the underlying reqwest client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let base_url = Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::Config(format!("invalid base url {:?}: {e}", config.rest_api.base_url))
        })?;

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .danger_accept_invalid_certs(config.rest_api.accept_invalid_certs)
            .build()?;

        let mut session = Session::new();
        if let Some(token) = config.credentials.token.as_deref() {
            validate_token(token)?;
            debug!("Injecting configured token into new session");
            session.set_token(token);
        }

        Ok(Self {
            http_client,
            config: Arc::new(config),
            base_url,
            session: Arc::new(RwLock::new(session)),
        })
    }

    /// Configuration this executor was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared session state
    pub fn session(&self) -> &Arc<RwLock<Session>> {
        &self.session
    }

    /// Snapshot of the headers attached to authenticated requests
    pub async fn headers(&self) -> HeaderSet {
        self.session.read().await.headers.clone()
    }

    /// Absolute URL of `path`, relative to the configured base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>, None::<&()>).await
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, Some(query), None::<&()>).await
    }

    /// Makes a POST request
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, None::<&()>, Some(body)).await
    }

    /// Makes a PUT request
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, None::<&()>, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<&()>, None::<&()>).await
    }

    /// Makes an authenticated request and decodes the JSON response
    ///
    /// An empty body (e.g. `204 No Content`) decodes as JSON `null`.
    pub async fn request<Q, B, T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let headers = self.headers().await;
        let response = make_http_request(
            &self.http_client,
            method,
            &self.url(path),
            &headers,
            query,
            body,
        )
        .await?;
        parse_response(response).await
    }

    /// Makes an authenticated request and returns the raw response body
    pub async fn request_bytes<Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Vec<u8>, AppError>
    where
        Q: Serialize + ?Sized,
    {
        let headers = self.headers().await;
        let response = make_http_request(
            &self.http_client,
            method,
            &self.url(path),
            &headers,
            query,
            None::<&()>,
        )
        .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Makes a POST request without the session headers
    ///
    /// Used for the authentication exchange itself.
    pub async fn post_unauthenticated<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = make_http_request(
            &self.http_client,
            Method::POST,
            &self.url(path),
            &HeaderSet::new(),
            None::<&()>,
            Some(body),
        )
        .await?;
        parse_response(response).await
    }
}

/// Decodes a JSON response body, mapping an empty body to `null`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    let parsed = if text.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str(&text)
    };
    parsed.map_err(|e| AppError::Deserialization(e.to_string()))
}

/// Issues a single HTTP request
///
/// Failures are never retried: transport errors and non-success statuses are
/// returned to the caller as they happen.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PUT, DELETE, etc.)
/// * `url` - Full URL to request
/// * `headers` - Header snapshot to attach
/// * `query` - Optional query parameters (URL-encoded)
/// * `body` - Optional request body (serialized to JSON)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError)` - Transport error or non-success status
pub async fn make_http_request<Q, B>(
    client: &Client,
    method: Method,
    url: &str,
    headers: &HeaderSet,
    query: Option<&Q>,
    body: Option<&B>,
) -> Result<Response, AppError>
where
    Q: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");

    for header in headers {
        request = request.header(header.name.as_str(), header.value.as_str());
    }

    if let Some(q) = query {
        request = request.query(q);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body_text);
    Err(AppError::from_status(status))
}
