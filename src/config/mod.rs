//! Configuration management module
//!
//! Loads server, provider, logging and CORS settings from environment variables and `.env`.

pub mod settings;

pub use settings::{GeminiConfig, Settings};
