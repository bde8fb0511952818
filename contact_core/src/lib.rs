//! Core library for the portfolio contact relay: validation, sanitizing,
//! email rendering, delivery and the HTTP handlers that tie them together.

pub mod client;
pub mod config;
pub mod delivery;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod sanitize;
pub mod template;
pub mod validation;

pub use client::{ContactClient, ContactForm, FormField, FormState};
pub use config::AppConfig;
pub use delivery::{build_outbound_email, DeliveryError, EmailSender, OutboundEmail, ResendClient, SendReceipt};
pub use error::{ContactError, Result};
pub use handlers::routes::create_routes;
pub use models::{ContactRequest, ContactResponse, ContactSubmission};
pub use validation::ValidationFailure;

pub use middleware::cors::cors_layer_from_config;
pub use middleware::logging::logging_layer;

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{info, warn};

/// Shared, read-only request state. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub config: Arc<AppConfig>,
    pub sender: Option<Arc<dyn EmailSender>>,
}

impl AppState {
    /// State with no delivery backend: the contact endpoint answers 503.
    pub fn new(config: AppConfig) -> Self {
        Self {
            app_name: "Portfolio Contact Relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: Arc::new(config),
            sender: None,
        }
    }

    /// State with a Resend client when a credential is configured.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let client = ResendClient::from_config(&config.delivery)?;
        let state = Self::new(config);

        match client {
            Some(client) => Ok(state.with_sender(Arc::new(client))),
            None => {
                warn!("RESEND_API_KEY is not set. Contact form will not send emails.");
                Ok(state)
            }
        }
    }

    pub fn with_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn delivery_configured(&self) -> bool {
        self.sender.is_some()
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = middleware::cors::cors_layer_from_config(&state.config.cors);

    Router::new()
        .merge(create_routes())
        .layer(CatchPanicLayer::custom(middleware::panic::handle_panic))
        .layer(cors)
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Contact API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ContactError::Unexpected(e.into()))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ContactError::Unexpected(e.into()))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
