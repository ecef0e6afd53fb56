//! dxfjson HTTP 服务
//!
//! 端点：
//! - `POST /parse-dxf` - 上传 DXF 文件（multipart 字段 `file`），返回 `{ "entities": [...] }`
//! - `GET /health` - 健康检查
//!
//! ```bash
//! curl -F "file=@drawing.dxf" http://127.0.0.1:5000/parse-dxf
//! ```

pub mod config;
pub mod error;
pub mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use handlers::{health_check, parse_dxf};

/// 各请求共享的只读状态
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// 构建路由
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.upload.max_body_bytes;
    Router::new()
        .route("/health", get(health_check))
        .route("/parse-dxf", post(parse_dxf))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 绑定配置中的地址并运行服务，直到收到 Ctrl-C
pub async fn start_server(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.server.bind_addr.clone();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => warn!(error = %err, "Failed to listen for shutdown signal"),
    }
}
