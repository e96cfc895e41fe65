//! Clipboard access.
//!
//! Copies go through the `arboard` crate.

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened, e.g. on a headless machine.
    #[error("clipboard not available: {0}")]
    NotAvailable(String),
    /// The clipboard refused the text.
    #[error("failed to copy: {0}")]
    CopyFailed(String),
}

/// Copy `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError`] if no clipboard is available or the copy is
/// rejected.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::NotAvailable(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
