//! Error types for bottle operations.
//!
//! Operation-level failures (a tool's `init` exiting nonzero, an install
//! timing out) are not errors — they are typed outcomes rendered into the
//! report text, matching the tool's never-throw boundary. [`BottleError`] is
//! reserved for genuine plumbing failures: I/O, a prompt that cannot be
//! answered, a missing embedded template.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bottle operations.
#[derive(Debug, Error)]
pub enum BottleError {
    /// An embedded template is missing from the binary.
    #[error("Embedded template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// A prompt could not be answered (non-interactive without a default).
    #[error("Cannot prompt for '{key}' in non-interactive mode")]
    PromptUnavailable { key: String },

    /// Shell command could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bottle operations.
pub type Result<T> = std::result::Result<T, BottleError>;
