//! Application startup and lifecycle management.

use crate::config::{InvoicingConfig, StorageBackend};
use crate::handlers;
use crate::middleware::metrics_middleware;
use crate::services::{
    init_metrics, InMemoryStore, InvoiceBook, JsonFileStore, KeyValueStore, UuidIdGenerator,
};
use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: InvoicingConfig,
    pub book: Arc<InvoiceBook>,
}

/// Build the HTTP router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/clients/:id",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .route(
            "/invoices",
            get(handlers::list_invoices).post(handlers::create_invoice),
        )
        .route("/invoices/next-number", get(handlers::next_number))
        .route(
            "/invoices/:id",
            get(handlers::get_invoice)
                .put(handlers::update_invoice)
                .delete(handlers::delete_invoice),
        )
        .route(
            "/invoices/:id/status",
            put(handlers::update_invoice_status),
        )
        .route(
            "/invoices/:id/email",
            get(handlers::email_invoice).post(handlers::send_invoice_email),
        )
        .route(
            "/payments",
            get(handlers::list_payments).post(handlers::record_payment),
        )
        .route("/reports/dashboard", get(handlers::dashboard))
        .route("/reports/income", get(handlers::income_report))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: InvoicingConfig) -> Result<Self, AppError> {
        init_metrics();

        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryStore::new()),
            StorageBackend::File => Arc::new(
                JsonFileStore::new(&config.storage.data_dir)
                    .await
                    .map_err(|e| {
                        tracing::error!(
                            error = %e,
                            data_dir = %config.storage.data_dir,
                            "Failed to initialize file storage"
                        );
                        e
                    })?,
            ),
        };

        let book = Arc::new(InvoiceBook::new(store, Arc::new(UuidIdGenerator)));

        let state = AppState {
            config: config.clone(),
            book,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port = port,
            storage = ?config.storage.backend,
            "Invoicing service listener bound"
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a handle to the bookkeeping service.
    pub fn book(&self) -> Arc<InvoiceBook> {
        self.state.book.clone()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!(
            service = "invoicing-service",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router).await
    }
}
