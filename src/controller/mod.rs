use std::future::Future;
use std::net::{SocketAddr, TcpListener};
use anyhow::Context;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;

pub mod health_check;
pub mod inventory_controller;

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let address: SocketAddr = config.socket_addr();
    let listener = TcpListener::bind(address)
        .with_context(|| format!("Error binding the API server to {}", address))?;

    info!("Inventory service listening on: {}", address);
    serve_with_shutdown(listener, shutdown_signal()).await
}

/// Serves the application on an already bound listener until `signal` resolves,
/// then drains in-flight requests.
pub async fn serve_with_shutdown(
    listener: TcpListener,
    signal: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    axum::Server::from_tcp(listener)
        .context("Error adopting the API server listener")?
        .serve(application().into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .context("Error spinning up the API server")
}

pub fn application() -> Router {
    router_endpoints()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
        )
        .fallback(page_not_found_handler)
}

pub fn router_endpoints() -> Router {
    health_check::router()
        .merge(inventory_controller::router())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            // Without a signal handler the server keeps serving until the process is killed.
            warn!("Unable to listen for shutdown signal, graceful shutdown disabled: {}", e);
            std::future::pending::<()>().await
        }
    }
}
