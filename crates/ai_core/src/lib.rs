//! AI Core - Generative text inference
//!
//! Provides an abstraction for single-prompt text generation and a
//! Google Gemini implementation using the `generateContent` REST endpoint.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
