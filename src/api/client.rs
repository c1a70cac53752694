use super::{DynamicObject, GroupVersionResource, ResourceApi};
use crate::error::{FwctlError, Result, SubmitError};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("fwctl/", env!("CARGO_PKG_VERSION"));

/// Where and how to reach the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub server: Url,
    pub token: Option<String>,
    /// Request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub namespace: Option<String>,
}

/// HTTP client for the control plane's dynamic resource API
pub struct ApiClient {
    client: reqwest::Client,
    server: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(connection: &Connection) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = connection.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FwctlError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            server: connection.server.clone(),
            token: connection.token.clone(),
        })
    }

    pub fn collection_url(&self, gvr: &GroupVersionResource, namespace: Option<&str>) -> String {
        format!(
            "{}{}",
            self.server.as_str().trim_end_matches('/'),
            gvr.collection_path(namespace)
        )
    }
}

impl ResourceApi for ApiClient {
    async fn create(
        &self,
        gvr: &GroupVersionResource,
        namespace: Option<&str>,
        object: DynamicObject,
    ) -> std::result::Result<DynamicObject, SubmitError> {
        let url = self.collection_url(gvr, namespace);
        let name = object.name().unwrap_or_default().to_string();
        let transport = |source: reqwest::Error| SubmitError::Transport {
            url: url.clone(),
            source,
        };

        let mut request = self.client.post(&url).json(&object);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!("POST {}", url);
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        tracing::debug!("POST {} -> {}", url, status);

        if status.is_success() {
            return response.json::<DynamicObject>().await.map_err(transport);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read error body from {}: {}", url, e);
                String::new()
            }
        };
        Err(classify_failure(status, &body, gvr, &name))
    }
}

/// The `Status` object the server sends with a failed request.
#[derive(Debug, Default, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    message: String,
    #[serde(default)]
    reason: String,
}

fn classify_failure(
    status: StatusCode,
    body: &str,
    gvr: &GroupVersionResource,
    name: &str,
) -> SubmitError {
    let api_status: ApiStatus = serde_json::from_str(body).unwrap_or_default();
    let detail = if !api_status.message.is_empty() {
        Some(api_status.message)
    } else if !body.trim().is_empty() {
        Some(body.trim().to_string())
    } else {
        None
    };
    let message = detail.clone().unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });

    let resource = gvr.to_string();
    let name = name.to_string();
    match (status.as_u16(), api_status.reason.as_str()) {
        (409, _) | (_, "AlreadyExists") => SubmitError::Conflict {
            resource,
            name,
            message: detail.unwrap_or_default(),
        },
        (400 | 422, _) | (_, "Invalid" | "BadRequest") => SubmitError::Invalid {
            resource,
            name,
            message,
        },
        (401 | 403, _) => SubmitError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        (404, _) => SubmitError::NotFound { resource, message },
        (code, _) => SubmitError::Server {
            status: code,
            message,
        },
    }
}
