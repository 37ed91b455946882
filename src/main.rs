mod application;
mod domain;
mod infrastructure;
mod presentation;

use infrastructure::AppContainer;
use presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let container = AppContainer::new()?;

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok());

    let server = HttpServer::new(
        container.ingest_handler.clone(),
        container.search_handler.clone(),
        container.catalog_handler.clone(),
        port,
    );

    server.run().await
}
