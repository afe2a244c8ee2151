//! Google Gemini integration
//!
//! Talks to the Generative Language REST API (`models/{model}:generateContent`).

mod client;

pub use client::GeminiInferenceEngine;
