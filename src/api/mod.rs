//! API client modules for the ClickUp integration.
//!
//! Everything clk knows about ClickUp lives under this module: the request
//! description passed to a transport, the [`Transport`] seam that actually
//! performs HTTP, the error taxonomy shared by every API call, and the typed
//! [`ClickUp`] client built on top of them.
//!
//! ## Features
//!
//! - **Typed Operations**: Identity lookup, team resolution, task search, timers
//! - **Lazy Resolution**: Current user and default team are fetched once per process
//! - **Strict Decoding**: Every consumed response shape has a schema struct
//! - **Uniform Failures**: Non-success statuses surface code and raw body untouched
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clk::api::ClickUp;
//! use clk::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load(None)?;
//! let mut client = ClickUp::new(&config);
//! let running = client.get_running_timer().await?;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde_json::Value;
use thiserror::Error;

pub mod clickup;

pub use clickup::{ClickUp, Task, TaskStatus, Team, TeamMember, TimeEntry, User};

/// Failures produced by the API layer.
///
/// None of these are retried. They travel unchanged through the resolver up
/// to the command layer, which is the only place they are turned into text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success HTTP status.
    #[error("ClickUp API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered successfully but the body did not match the expected shape.
    #[error("Unexpected ClickUp response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request never produced a response.
    #[error("Failed to reach ClickUp: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API key belongs to a user without any team.
    #[error("No teams found for this API key")]
    NoTeams,
}

impl ApiError {
    /// HTTP status code of a [`ApiError::Status`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A single call against the ClickUp API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub endpoint: String,
    /// Query parameters, encoded by the transport.
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Looks up the first value of a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// The HTTP seam underneath [`ClickUp`].
///
/// Implementations attach the credential and the JSON content type to every
/// request, serialize the body when present, and turn any non-success status
/// into [`ApiError::Status`] carrying the raw response text.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs the request and returns the parsed JSON body.
    ///
    /// An empty success body is returned as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The connection fails
    /// - The service answers with a non-success status
    /// - The body is not valid JSON
    async fn send(&self, request: Request) -> Result<Value, ApiError>;
}
