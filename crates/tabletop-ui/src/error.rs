//! Error types surfaced while wiring enhancements onto a page.

use thiserror::Error;

use crate::core::config::ConfigError;

/// Primary error type for enhancement start-up.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// No `window` global (not running in a browser main thread).
    #[error("browser window is unavailable")]
    MissingWindow,
    /// The window has no associated document.
    #[error("document is unavailable")]
    MissingDocument,
    /// The document has no `<head>` to receive the style block.
    #[error("document has no <head> element")]
    MissingHead,
    /// A DOM call rejected the operation.
    #[error("DOM operation '{operation}' failed: {detail}")]
    Dom {
        /// Short name of the failing call.
        operation: &'static str,
        /// Stringified JS error value.
        detail: String,
    },
    /// Configuration block could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
