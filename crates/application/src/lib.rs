//! Application layer - Use cases and orchestration
//!
//! Defines the ports the search depends on (weather, places, inference) and
//! the services that drive a city search over them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, SearchError};
pub use ports::*;
pub use services::*;
