use std::{fmt, path::PathBuf, sync::Arc};

use crate::export::{
    dependencies::{ExportDependencies, ExportFileSaver, ImageEncoder},
    file::FileSaveConfig,
    snapshot::CanvasSnapshot,
    types::{ExportDestination, ExportError, ExportResult},
};
use tokio::task;

/// One queued export: the pixels to write and where they go.
#[derive(Clone)]
pub struct ExportRequest {
    pub snapshot: CanvasSnapshot,
    pub destination: ExportDestination,
    pub save_config: FileSaveConfig,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("size", &(self.snapshot.width(), self.snapshot.height()))
            .field("destination", &self.destination)
            .field("save_directory", &self.save_config.save_directory)
            .finish()
    }
}

/// Encodes, saves and optionally shares one snapshot.
///
/// Encoding and saving run on blocking tasks. Only encode and save failures
/// fail the export; a failed share is logged and reported as `shared: false`.
pub async fn perform_export(
    request: ExportRequest,
    dependencies: Arc<ExportDependencies>,
) -> Result<ExportResult, ExportError> {
    log::info!(
        "Starting export: {}x{} ({:?})",
        request.snapshot.width(),
        request.snapshot.height(),
        request.destination
    );

    let image_data = encode(Arc::clone(&dependencies.encoder), request.snapshot).await?;
    log::debug!("Encoded image: {} bytes", image_data.len());

    let size_bytes = image_data.len();
    let saved_path = save(
        Arc::clone(&dependencies.saver),
        image_data,
        request.save_config,
    )
    .await?;

    let shared = match request.destination {
        ExportDestination::FileAndShare => match dependencies.share.share(&saved_path).await {
            Ok(()) => {
                log::info!("Shared {}", saved_path.display());
                true
            }
            Err(e) => {
                log::error!("Failed to share {}: {}", saved_path.display(), e);
                false
            }
        },
        ExportDestination::FileOnly => {
            log::debug!("Share not requested for this export");
            false
        }
    };

    Ok(ExportResult {
        saved_path,
        size_bytes,
        shared,
    })
}

async fn encode(
    encoder: Arc<dyn ImageEncoder>,
    snapshot: CanvasSnapshot,
) -> Result<Vec<u8>, ExportError> {
    task::spawn_blocking(move || encoder.encode(&snapshot))
        .await
        .map_err(|e| ExportError::TaskFailed(format!("Encode task failed: {}", e)))?
}

async fn save(
    saver: Arc<dyn ExportFileSaver>,
    image_data: Vec<u8>,
    config: FileSaveConfig,
) -> Result<PathBuf, ExportError> {
    task::spawn_blocking(move || saver.save(&image_data, &config))
        .await
        .map_err(|e| ExportError::TaskFailed(format!("Save task failed: {}", e)))?
}
