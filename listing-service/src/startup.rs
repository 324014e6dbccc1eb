//! Application startup and lifecycle management.

use crate::config::ListingConfig;
use crate::handlers;
use crate::services::providers::openai::OpenAiProvider;
use crate::services::CompletionProvider;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::{
    routing::{any, get},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::{request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Request bodies carry base64 images; allow up to the hosting platform's
/// 6 MB payload cap instead of axum's 2 MB default.
pub const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub model: String,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(model: impl Into<String>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            model: model.into(),
            provider,
        }
    }
}

/// Build the HTTP router.
///
/// Listing routes are mounted both at the root and under the
/// `/.netlify/functions` prefix existing front-ends call.
pub fn build_router(state: AppState) -> Router {
    let listing_routes = Router::new()
        .route("/generate-listing", any(handlers::listing::generate_listing))
        .route("/generate-listings", any(handlers::listing::generate_listings));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .merge(listing_routes.clone())
        .nest("/.netlify/functions", listing_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the OpenAI provider.
    pub async fn build(config: ListingConfig) -> Result<Self, AppError> {
        let provider = OpenAiProvider::new(config.openai.clone());
        if !provider.is_configured() {
            tracing::warn!("OpenAI API key is empty - listing requests will fail");
        }

        tracing::info!(
            model = %config.openai.model,
            base_url = %config.openai.api_base_url,
            "Initialized OpenAI provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an already constructed provider.
    pub async fn build_with_provider(
        config: ListingConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState::new(config.openai.model.clone(), provider);
        let router = build_router(state);

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listing service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
