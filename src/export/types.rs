//! Data types for canvas export.

use std::path::PathBuf;
use thiserror::Error;

/// What happens to the image after it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDestination {
    /// Save to disk only.
    FileOnly,
    /// Save to disk, then hand the file to the share target.
    FileAndShare,
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Where the encoded image was written.
    pub saved_path: PathBuf,
    /// Size of the encoded image in bytes.
    pub size_bytes: usize,
    /// Whether the share step ran and succeeded.
    pub shared: bool,
}

/// Outcome of an export request, as reported back to the UI.
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    Success(ExportResult),
    Failed(String),
}

impl ExportOutcome {
    /// Short user-facing message describing the outcome.
    pub fn message(&self) -> String {
        match self {
            ExportOutcome::Success(result) => {
                format!("File saved at {}", result.saved_path.display())
            }
            ExportOutcome::Failed(reason) => {
                format!("Something went wrong while saving the file: {reason}")
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Success(_))
    }
}

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Rendering failed: {0}")]
    Render(#[from] cairo::Error),

    #[error("Snapshot failed: {0}")]
    Snapshot(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Invalid filename template '{0}'")]
    InvalidTemplate(String),

    #[error("Failed to save image: {0}")]
    Save(#[from] std::io::Error),

    #[error("Sharing failed: {0}")]
    Share(String),

    #[error("Export task failed: {0}")]
    TaskFailed(String),

    #[error("Export manager not running")]
    ManagerClosed,
}

/// Status of the export worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// Nothing exported yet, or status was reset.
    Idle,
    /// Encoding/saving in progress.
    InProgress,
    /// Last export completed successfully.
    Success,
    /// Last export failed.
    Failed(String),
}
