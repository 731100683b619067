use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// The service is stateless between requests; the only shared data is the
/// configuration (and, through it, the page/upload directories on disk).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (public URL, storage directories).
    pub config: Arc<ServerConfig>,
}
