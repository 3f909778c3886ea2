//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Graph;
use crate::planner::SearchConfig;

/// Shared application state.
///
/// The network is loaded once at startup and only read afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The port network
    pub graph: Arc<Graph>,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph, config: SearchConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }
}
