//! # lovetype-server
//!
//! HTTP front end for the classifier. Exposes health, type listing,
//! scoring, and reload endpoints over a shared [`DataStore`].
//!
//! [`DataStore`]: lovetype_data::DataStore

pub mod api;
pub mod error;
pub mod state;

pub use api::router;
pub use error::{ApiError, ServerError};
pub use state::AppState;

use lovetype_core::LovetypeConfig;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &LovetypeConfig) -> Result<(), ServerError> {
    let state = AppState::open(config.data.effective_data_dir());
    let addr = config.server.bind_address();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "lovetype API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("lovetype API shutting down");
        })
        .await
        .map_err(ServerError::Serve)
}
