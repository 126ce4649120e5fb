//! Error types for countdown-engine operations.
//!
//! Resolution itself never fails; these errors only come out of binding
//! persistence.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountdownError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The binding store on disk exists but does not hold a usable binding map.
    #[error("Binding store error at {}: {message}", path.display())]
    Store { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, CountdownError>;
