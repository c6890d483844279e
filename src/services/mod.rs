//! Service layer module
//!
//! Contains the prompt builder and the content task runner

pub mod content;
pub mod prompts;

pub use content::ContentService;
