//! Middleware module
//!
//! Request logging and request body validation

pub mod logging;
pub mod validation;

pub use logging::request_logging_middleware;
pub use validation::ValidatedJson;
