//! Natural-language RAID explanations fetched from an external service.
//!
//! The rest of the binary depends only on [`ExplanationProvider`]; the HTTP
//! transport and wire schema live behind it so a different backend can be
//! swapped in without touching the commands.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use raid_model::level::RaidLevel;

use crate::cli::ProviderArgs;

/// Explanation is the per-level record the service returns. Entries in
/// `pros_cons` are prefixed `+` for a pro and `-` for a con.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Explanation {
    pub title: String,
    pub description: String,
    pub pros_cons: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("schema: {0}")]
    Schema(String),
}

#[async_trait]
pub trait ExplanationProvider {
    async fn explain(&self, level: RaidLevel) -> Result<Explanation, ExplainError>;
}

/// Fetches explanations over HTTP as JSON.
pub struct HttpExplanationProvider {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl HttpExplanationProvider {
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(args: &ProviderArgs) -> Result<Self, ExplainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(args.explain_timeout_ms))
            .build()?;

        let token = args.explain_token.trim();
        let token = if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        };

        Ok(Self {
            client,
            url: args.explain_url.clone(),
            token,
        })
    }
}

#[async_trait]
impl ExplanationProvider for HttpExplanationProvider {
    async fn explain(&self, level: RaidLevel) -> Result<Explanation, ExplainError> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "level": level.label() }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let body: Value = response.json().await?;
        parse_explanation(&body)
    }
}

/// `parse_explanation` validates the response shape: non-empty `title` and
/// `description` strings plus a `pros_cons` array of strings.
pub fn parse_explanation(body: &Value) -> Result<Explanation, ExplainError> {
    let title = body.get("title").and_then(Value::as_str).unwrap_or_default();
    if title.is_empty() {
        return Err(ExplainError::Schema("missing or empty title".to_string()));
    }

    let description = body
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if description.is_empty() {
        return Err(ExplainError::Schema(
            "missing or empty description".to_string(),
        ));
    }

    let items = body
        .get("pros_cons")
        .and_then(Value::as_array)
        .ok_or_else(|| ExplainError::Schema("pros_cons must be an array".to_string()))?;

    let mut pros_cons = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(entry) => pros_cons.push(entry.to_string()),
            None => {
                return Err(ExplainError::Schema(
                    "pros_cons entries must be strings".to_string(),
                ));
            }
        }
    }

    Ok(Explanation {
        title: title.to_string(),
        description: description.to_string(),
        pros_cons,
    })
}
