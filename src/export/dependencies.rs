use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::task;

use crate::export::{
    file::{self, FileSaveConfig},
    share,
    snapshot::{self, CanvasSnapshot},
    types::ExportError,
};

/// Abstraction over turning a pixel snapshot into encoded image bytes.
pub trait ImageEncoder: Send + Sync {
    fn encode(&self, snapshot: &CanvasSnapshot) -> Result<Vec<u8>, ExportError>;
}

/// Abstraction over file saving for exported drawings.
pub trait ExportFileSaver: Send + Sync {
    fn save(&self, image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError>;
}

/// Abstraction over sharing a saved file with another application.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, path: &Path) -> Result<(), ExportError>;
}

/// Bundle of dependencies used by the export pipeline. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ExportDependencies {
    pub encoder: Arc<dyn ImageEncoder>,
    pub saver: Arc<dyn ExportFileSaver>,
    pub share: Arc<dyn ShareTarget>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self::with_share_command(None)
    }
}

impl ExportDependencies {
    /// Default PNG encoder and file saver, sharing through `command` if given.
    pub fn with_share_command(command: Option<Vec<String>>) -> Self {
        Self {
            encoder: Arc::new(PngEncoder),
            saver: Arc::new(DefaultFileSaver),
            share: Arc::new(CommandShareTarget {
                command: command.unwrap_or_default(),
            }),
        }
    }
}

struct PngEncoder;
struct DefaultFileSaver;

struct CommandShareTarget {
    command: Vec<String>,
}

impl ImageEncoder for PngEncoder {
    fn encode(&self, snapshot: &CanvasSnapshot) -> Result<Vec<u8>, ExportError> {
        snapshot::encode_png(snapshot)
    }
}

impl ExportFileSaver for DefaultFileSaver {
    fn save(&self, image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
        file::save_image(image_data, config)
    }
}

#[async_trait]
impl ShareTarget for CommandShareTarget {
    async fn share(&self, path: &Path) -> Result<(), ExportError> {
        let command = self.command.clone();
        let path = path.to_path_buf();
        task::spawn_blocking(move || share::share_with_command(&command, &path))
            .await
            .map_err(|e| ExportError::TaskFailed(format!("Share task failed: {}", e)))?
    }
}
