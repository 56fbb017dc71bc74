use crate::api::{ApiError, Request, Transport};
use crate::libs::config::Config;
use reqwest::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde_json::Value;
use tracing::debug;

/// `reqwest` transport for the ClickUp API.
///
/// ClickUp personal tokens go into the `Authorization` header as is, without
/// a `Bearer` prefix.
pub struct Http {
    client: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for Http {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Http").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl Http {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl Transport for Http {
    async fn send(&self, request: Request) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        debug!(method = %request.method, endpoint = %request.endpoint, "ClickUp request");

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let res = builder.send().await?;
        let status = res.status();
        let text = res.text().await?;
        debug!(status = status.as_u16(), endpoint = %request.endpoint, "ClickUp response");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|source| ApiError::Decode {
            endpoint: request.endpoint,
            source,
        })
    }
}
