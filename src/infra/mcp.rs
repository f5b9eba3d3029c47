//! MCP server integration (stdio + Streamable HTTP) for notes-mcp.
//!
//! - Exposes the single `create_post` tool
//! - Supports stdio mode (the default) and Streamable HTTP at `/mcp`
//!
//! Every outcome of a tool call, including HTTP and network failures from
//! the blog API, is rendered into the tool result's text content. Protocol
//! errors are reserved for malformed invocations (missing `content`).

use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    ServerHandler,
    model::{CallToolResult, Content, JsonObject},
    handler::server::{
        router::Router,
        tool::{Parameters, ToolRouter},
    },
    serve_server,
};

use rmcp::transport::streamable_http_server::tower::{
    StreamableHttpServerConfig, StreamableHttpService,
};

pub use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;

use crate::clients::blog::BlogRemote;
use crate::domain::{render_outcome, CreateError, PostCreated};
use crate::infra::config::Config;

/// Seam between the tool handler and the blog API, so the handler can be
/// exercised with an injected publisher instead of a live remote.
#[async_trait::async_trait]
pub trait PostPublisher: Send + Sync + 'static {
    async fn publish(&self, content: &str) -> Result<PostCreated, CreateError>;
}

#[async_trait::async_trait]
impl PostPublisher for BlogRemote {
    async fn publish(&self, content: &str) -> Result<PostCreated, CreateError> {
        self.create_post(content).await
    }
}

/// The MCP server handler. Holds whichever `PostPublisher` it is given
/// at construction; the credential inside is read-only for the process.
#[derive(Clone)]
pub struct NotesSvc {
    publisher: Arc<dyn PostPublisher>,
}

impl NotesSvc {
    pub fn new(publisher: Arc<dyn PostPublisher>) -> Self {
        Self { publisher }
    }
}

// We don't need extra methods from ServerHandler yet, but rmcp expects the impl.
impl ServerHandler for NotesSvc {}

/// The tool router.
/// Input:  { "content": String }  — markdown body of the post
/// Output: one text content item, one of the four fixed outcome messages.
#[rmcp::tool_router]
impl NotesSvc {
    #[rmcp::tool(name = "create_post", description = "Create a new blog post")]
    async fn create_post(
        &self,
        params: Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(params = ?params.0, "create_post invoked");
        let content = params
            .0
            .get("content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("missing required field: content", None))?
            .to_owned();

        // Not validated as markdown or non-empty; the remote API decides.
        let outcome = self.publisher.publish(&content).await;
        let text = render_outcome(&outcome);
        tracing::trace!(text = %text, "create_post returning");

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

pub type NotesRouter = Router<NotesSvc>;

pub fn factory_with_publisher(
    publisher: Arc<dyn PostPublisher>,
) -> (NotesSvc, ToolRouter<NotesSvc>) {
    let handler = NotesSvc::new(publisher);
    let tools = NotesSvc::tool_router();
    (handler, tools)
}

pub fn factory_from_config(cfg: &Config) -> (NotesSvc, ToolRouter<NotesSvc>) {
    let publisher = Arc::new(BlogRemote::from_config(cfg)) as Arc<dyn PostPublisher>;
    factory_with_publisher(publisher)
}

/// Run the MCP server over stdio: JSON-RPC frames on stdin/stdout.
pub async fn serve_stdio_from(
    factory: impl FnOnce() -> (NotesSvc, ToolRouter<NotesSvc>),
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (handler, tools) = factory();
    let service = Router::new(handler).with_tools(tools);
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();
    serve_server(service, (stdin, stdout)).await?;
    Ok(())
}

pub fn make_streamable_http_service(
    factory: impl Fn() -> (NotesSvc, ToolRouter<NotesSvc>) + Send + Sync + Clone + 'static,
    session_mgr: Arc<LocalSessionManager>,
) -> StreamableHttpService<NotesRouter, LocalSessionManager> {
    let cfg = StreamableHttpServerConfig::default();
    let service_factory = move || {
        let (handler, tools) = factory();
        let service = Router::new(handler).with_tools(tools);
        Ok(service)
    };
    StreamableHttpService::new(service_factory, session_mgr, cfg)
}
