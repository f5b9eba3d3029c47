use axum::{
    routing::{any_service, get},
    Router,
};
use std::sync::Arc;

use crate::infra::config::Config;
use crate::infra::mcp;

/// HTTP app for `MODE=server`: `/healthz` plus streamable MCP at `/mcp`.
pub fn build_app(cfg: &Config) -> Router {
    let session_mgr = Arc::new(mcp::LocalSessionManager::default());
    let cfg = cfg.clone();
    let mcp_service =
        mcp::make_streamable_http_service(move || mcp::factory_from_config(&cfg), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            mode: "server".into(),
            port: 0,
            api_base: "http://127.0.0.1:9".into(),
            auth_key: String::new(),
        }
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let app = build_app(&test_config());
        let req = Request::builder()
            .method("GET")
            .uri("/healthz")
            .body(axum::body::Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = build_app(&test_config());
        let req = Request::builder()
            .method("GET")
            .uri("/nope")
            .body(axum::body::Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
