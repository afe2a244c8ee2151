//! HeatGuard HTTP presentation layer
//!
//! Serves city searches and provider health over a small JSON API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::{app, create_router};
pub use state::AppState;
