//! HeatGuard command-line front end

pub mod cli;
pub mod interactive;
pub mod render;
pub mod status;

pub use cli::{Cli, Commands};
