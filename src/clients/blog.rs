use reqwest::Client;

use crate::domain::{CreateError, PostCreated, PostWire};
use crate::infra::config::Config;
use crate::infra::http::headers::{add_standard_headers, generate_request_id};

/// Client for the remote blog API. One authenticated POST per call,
/// no retries, no explicit timeout (reqwest defaults apply).
#[derive(Clone)]
pub struct BlogRemote {
    base: String,
    auth_key: String,
    http: Client,
}

impl BlogRemote {
    pub fn new(base: impl Into<String>, auth_key: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            auth_key: auth_key.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.api_base.clone(), cfg.auth_key.clone())
    }

    pub async fn create_post(&self, content: &str) -> Result<PostCreated, CreateError> {
        // Guard clause, not a retryable failure: without a credential no
        // request leaves the process.
        if self.auth_key.is_empty() {
            return Err(CreateError::MissingCredential);
        }

        let url = format!("{}/api/posts/create", self.base.trim_end_matches('/'));
        tracing::debug!(endpoint = %url, "blog.create_post request");

        let form = reqwest::multipart::Form::new().text("content", content.to_owned());
        let (builder, _rid) =
            add_standard_headers(self.http.post(url), Some(generate_request_id()));
        let resp = builder
            .header("X-Custom-Auth-Key", self.auth_key.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| CreateError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .map_err(|e| CreateError::Transport(e.to_string()))?;
            return Err(CreateError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let wire = resp
            .json::<PostWire>()
            .await
            .map_err(|e| CreateError::Transport(e.to_string()))?;
        Ok(wire.into())
    }
}
