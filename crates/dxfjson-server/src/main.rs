//! dxfjson 服务入口

use anyhow::{Context, Result};
use dxfjson_server::{start_server, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::discover().context("failed to load configuration")?;
    init_logging(&config);

    info!("Starting dxfjson server v{}", env!("CARGO_PKG_VERSION"));
    start_server(AppState::new(config))
        .await
        .context("server terminated with an error")?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` 优先，否则使用配置中的等级
fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},tower_http={level}",
            level = config.logging.level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
