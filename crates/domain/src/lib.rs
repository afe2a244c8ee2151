//! Domain layer for HeatGuard
//!
//! Contains the weather snapshot, derived heat-health values, place and tip
//! aggregates, and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
