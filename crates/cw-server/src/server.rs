use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use cw_core::{ClipboardStore, ExpiryPolicy, RequestGate};

use crate::routes;

/// Everything a request handler needs, cloned into each filter chain.
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<ClipboardStore>,
    pub gate: Arc<RequestGate>,
}

impl ServerState {
    pub fn new(password: impl Into<String>, policy: Option<ExpiryPolicy>) -> Self {
        Self {
            store: Arc::new(ClipboardStore::new(policy)),
            gate: Arc::new(RequestGate::new(password)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub password: String,
    /// Seconds after the last write at which the clipboard is cleared.
    /// Zero or negative disables expiry.
    pub clear_after_secs: i64,
}

/// Runs the relay until the process is stopped. A bind failure is
/// returned, not retried.
pub async fn run(config: ServerConfig) -> Result<()> {
    let policy = ExpiryPolicy::from_secs(config.clear_after_secs);
    if let Some(policy) = &policy {
        info!(
            "clearing clipboard {:?} after the last write, checked every {:?}",
            policy.clear_after(),
            policy.poll_interval()
        );
    }

    let state = ServerState::new(config.password, policy);
    let routes = routes::routes(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let (bound, serving) = warp::serve(routes)
        .try_bind_ephemeral(addr)
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on port {}", bound.port());
    serving.await;
    Ok(())
}
