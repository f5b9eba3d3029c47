use notes_mcp::infra::{self, config::Config};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infra::logging::init();

    let cfg = Config::from_env();
    tracing::info!(
        mode = %cfg.mode,
        api_base = %cfg.api_base,
        auth_key_set = !cfg.auth_key.is_empty(),
        "BOOT notes-mcp"
    );

    // Server mode: streamable MCP over HTTP at /mcp, plus /healthz.
    if cfg.mode == "server" {
        let app = infra::http_app::build_app(&cfg);
        let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
        axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
        return Ok(());
    }

    // Default: MCP over stdio. stdout carries protocol frames, so all
    // logging goes to stderr (see infra::logging).
    tracing::info!("notes-mcp serving on stdio");
    infra::mcp::serve_stdio_from(move || infra::mcp::factory_from_config(&cfg))
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
