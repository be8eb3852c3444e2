//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use atm_types::{AccountRepository, CustomerRepository, TransactionRepository};

use super::handlers;
use crate::CrudService;

/// HTTP Server for the ATM banking API.
///
/// Carries one dispatch service per record type; the route table is the
/// same generic CRUD group repeated under three prefixes.
pub struct HttpServer<A, C, T>
where
    A: AccountRepository,
    C: CustomerRepository,
    T: TransactionRepository,
{
    accounts: Arc<CrudService<A>>,
    customers: Arc<CrudService<C>>,
    transactions: Arc<CrudService<T>>,
}

impl<A, C, T> HttpServer<A, C, T>
where
    A: AccountRepository,
    C: CustomerRepository,
    T: TransactionRepository,
{
    /// Creates a new HTTP server over the three dispatch services.
    pub fn new(
        accounts: CrudService<A>,
        customers: CrudService<C>,
        transactions: CrudService<T>,
    ) -> Self {
        Self {
            accounts: Arc::new(accounts),
            customers: Arc::new(customers),
            transactions: Arc::new(transactions),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .merge(handlers::crud_routes("/api/accounts", self.accounts.clone()))
            .merge(handlers::crud_routes(
                "/api/customers",
                self.customers.clone(),
            ))
            .merge(handlers::crud_routes(
                "/api/transactions",
                self.transactions.clone(),
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
