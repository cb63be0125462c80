//! Canvas export for drawingpad.
//!
//! A snapshot of the composed canvas is taken on the calling thread, then a
//! background task encodes it as PNG, writes it to the export directory and
//! optionally hands the file to a share command.

pub mod file;
pub mod share;
pub mod snapshot;
pub mod types;

mod dependencies;
mod manager;
mod pipeline;
#[cfg(test)]
mod tests;

pub use dependencies::{ExportDependencies, ExportFileSaver, ImageEncoder, ShareTarget};
pub use file::FileSaveConfig;
pub use manager::ExportManager;
pub use pipeline::{ExportRequest, perform_export};
pub use snapshot::{CanvasSnapshot, encode_png};
pub use types::{ExportDestination, ExportError, ExportOutcome, ExportResult, ExportStatus};
