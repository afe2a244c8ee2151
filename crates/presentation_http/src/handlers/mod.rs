//! HTTP request handlers

pub mod health;
pub mod sample;
pub mod weather;
