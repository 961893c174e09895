use anyhow::Context;

use electrovault_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, warnings) = ApiConfig::from_env();
    electrovault_observability::init_with(config.log_format);
    for warning in warnings {
        tracing::warn!("{warning}");
    }

    let app = electrovault_api::app::build_app(&config)
        .with_context(|| format!("failed to open inventory at {}", config.data_file.display()))?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        data_file = %config.data_file.display(),
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
