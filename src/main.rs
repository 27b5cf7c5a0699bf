use std::sync::Arc;

use tracing::info;

use link_scrap::{
    routes, setup_logging, Config, Fetcher, FetcherConfig, LogConfig, ScrapError, ScrapGenerator,
};

#[tokio::main]
async fn main() -> Result<(), ScrapError> {
    setup_logging(LogConfig::default())?;

    let config = Config::from_env();
    info!(host = %config.host, port = config.port, "Configuration loaded");

    let fetcher = Fetcher::new_with_config(FetcherConfig {
        timeout: config.fetch_timeout,
        ..FetcherConfig::default()
    });
    let generator = Arc::new(ScrapGenerator::new_with_fetcher(fetcher));

    let app = routes::app(generator);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
