use crate::routes::{api_routes, health_routes, AppState, API_PREFIX};
use crate::{Result, ServerConfig, ServerError};
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use cocktail::catalog::RecipeCatalog;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_BODY_SIZE_1MB: usize = 1024 * 1024;

/// Opens the catalog, seeding it from the configured file if any.
pub fn open_catalog(config: &ServerConfig) -> Result<RecipeCatalog> {
    let mut builder = RecipeCatalog::builder();
    if let Some(seed_file) = &config.seed_file {
        tracing::info!("Seeding catalog from {}", seed_file.display());
        builder = builder.seed_file(seed_file);
    }
    Ok(builder.open()?)
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    let origins = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| ServerError::Config(format!("Invalid origin '{origin}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Builds the application router around `catalog`.
pub fn app(catalog: RecipeCatalog, config: &ServerConfig) -> Result<Router> {
    let state = AppState::new(catalog);

    Ok(Router::new()
        .nest(API_PREFIX, api_routes().with_state(state))
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_1MB))
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let catalog = open_catalog(config)?;
    let app = app(catalog, config)?;
    let addr = config.socket_addr()?;

    tracing::info!("Starting cocktail server on http://{}{}", addr, API_PREFIX);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Io)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Io)?;

    tracing::info!("Cocktail server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
