//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over the weather, places and inference
//! integrations, and owns configuration loading, logging setup and service
//! wiring.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod wiring;

pub use adapters::*;
pub use config::{AppConfig, ConfigWarning, LogFormat, ServerConfig, WarningSeverity};
pub use telemetry::{DEFAULT_LOG_FILTER, TelemetryError, init_logging};
pub use wiring::{Providers, Services};
