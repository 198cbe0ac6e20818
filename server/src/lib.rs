//! Development backend for the travel booking client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the two endpoints the reference backend provides (`/register`
//! and `/login`) over an in-memory user list, so the SPA and CLI can be run
//! and tested end to end. The remaining client endpoints are intentionally
//! unrouted and answer `404`.

pub mod config;
pub mod routes;
pub mod services;
pub mod state;

use tokio::net::TcpListener;

use crate::state::AppState;

/// Serve the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, routes::app(state)).with_graceful_shutdown(shutdown).await
}
