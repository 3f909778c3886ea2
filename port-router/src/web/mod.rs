//! Web layer for the port router.
//!
//! Provides HTTP endpoints for browsing the network, searching single
//! routes and planning multi-leg journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
