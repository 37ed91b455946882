use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::presentation::http::{
    handlers::{CatalogHandler, IngestHandler, SearchHandler},
    routes::{catalog_routes, health_routes, ingest_routes, search_routes},
};

pub struct HttpServer {
    ingest_handler: Arc<IngestHandler>,
    search_handler: Arc<SearchHandler>,
    catalog_handler: Arc<CatalogHandler>,
    port: u16,
}

impl HttpServer {
    pub fn new(
        ingest_handler: Arc<IngestHandler>,
        search_handler: Arc<SearchHandler>,
        catalog_handler: Arc<CatalogHandler>,
        port: Option<u16>,
    ) -> Self {
        Self {
            ingest_handler,
            search_handler,
            catalog_handler,
            port: port.unwrap_or(3000),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .merge(health_routes())
            .merge(ingest_routes(self.ingest_handler))
            .merge(search_routes(self.search_handler))
            .merge(catalog_routes(self.catalog_handler))
            .layer(cors)
            .layer(RequestBodyLimitLayer::new(25 * 1024 * 1024)) // 25MB cap for image uploads
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<axum::body::Body>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            );

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        tracing::info!("Server listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
