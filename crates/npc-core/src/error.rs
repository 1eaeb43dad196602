//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` upward
//! via `#[from]` where configuration flows through them.

use thiserror::Error;

/// The top-level error type for `npc-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `npc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
