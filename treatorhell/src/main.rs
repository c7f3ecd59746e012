use clap::Parser;
use tracing::{info, warn};
use treatorhell::{Config, app, init_logging};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    init_logging();

    let state = config.app_state();
    if !state.gateway.is_configured() {
        warn!("OPENAI_API_KEY is not set; chat endpoints will answer 500");
    }
    let store = config.store();
    info!(
        responses = %store.path().display(),
        model = %config.model,
        "starting"
    );

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
