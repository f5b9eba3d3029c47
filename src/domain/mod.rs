use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// A post accepted by the remote API. `id` and `url` arrive as JSON strings
/// or numbers; both are kept as plain text for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCreated {
    pub id: String,
    pub url: String,
}

/// Everything that can go wrong creating a post, one variant per outcome.
/// Display strings are the exact text surfaced to the MCP client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CreateError {
    #[error("Error: BLOG_AUTH_KEY environment variable is not set")]
    MissingCredential,
    /// The remote rejected the request; status and body reported verbatim.
    #[error("Error creating post ({status}): {body}")]
    Http { status: u16, body: String },
    /// Network or body-parse failure, caught at the call site.
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Wire shape of a successful create response. Both fields are required;
/// a body missing either is treated as malformed.
#[derive(Deserialize)]
pub struct PostWire {
    pub id: JsonValue,
    pub url: JsonValue,
}

fn field_text(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<PostWire> for PostCreated {
    fn from(w: PostWire) -> Self {
        PostCreated {
            id: field_text(&w.id),
            url: field_text(&w.url),
        }
    }
}

/// Pure formatting step: turns a create outcome into the single text
/// payload returned to the client. No IO here.
pub fn render_outcome(outcome: &Result<PostCreated, CreateError>) -> String {
    match outcome {
        Ok(post) => format!(
            "Post created successfully!\nID: {}\nURL: {}",
            post.id, post.url
        ),
        Err(e) => e.to_string(),
    }
}
