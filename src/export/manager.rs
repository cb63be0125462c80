use std::sync::Arc;

use tokio::sync::{Mutex, Notify, mpsc};

use crate::export::{
    dependencies::ExportDependencies,
    file::FileSaveConfig,
    pipeline::{ExportRequest, perform_export},
    snapshot::CanvasSnapshot,
    types::{ExportDestination, ExportError, ExportOutcome, ExportStatus},
};

/// Runs exports on a background tokio task.
///
/// The UI thread hands over a snapshot and keeps drawing; completion is
/// picked up later through `try_take_result` (polling from an event loop)
/// or `wait_for_result` (from async code).
#[derive(Clone)]
pub struct ExportManager {
    /// Snapshots waiting for the worker, oldest first.
    request_tx: mpsc::UnboundedSender<ExportRequest>,
    /// Idle until the first request; afterwards tracks the latest one.
    status: Arc<Mutex<ExportStatus>>,
    /// Saved path or failure text, cleared once the caller reads it.
    last_result: Arc<Mutex<Option<ExportOutcome>>>,
    /// Wakes `wait_for_result` when an outcome lands.
    completed: Arc<Notify>,
}

impl ExportManager {
    /// Spawns the export worker on `runtime_handle` with the PNG encoder, the
    /// file saver and no share command.
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self::with_dependencies(runtime_handle, ExportDependencies::default())
    }

    /// Spawns the export worker with the given encoder, saver and share target.
    pub fn with_dependencies(
        runtime_handle: &tokio::runtime::Handle,
        dependencies: ExportDependencies,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ExportRequest>();
        let status = Arc::new(Mutex::new(ExportStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));
        let completed = Arc::new(Notify::new());
        let dependencies = Arc::new(dependencies);

        let status_clone = status.clone();
        let result_clone = last_result.clone();
        let completed_clone = completed.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!("Processing export request: {:?}", request);

                *status_clone.lock().await = ExportStatus::InProgress;

                let outcome = match perform_export(request, dependencies.clone()).await {
                    Ok(result) => {
                        log::info!("Export successful: {}", result.saved_path.display());
                        *status_clone.lock().await = ExportStatus::Success;
                        ExportOutcome::Success(result)
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Export failed: {}", error_message);
                        *status_clone.lock().await = ExportStatus::Failed(error_message.clone());
                        ExportOutcome::Failed(error_message)
                    }
                };

                *result_clone.lock().await = Some(outcome);
                completed_clone.notify_one();
            }
            log::debug!("Export worker stopped");
        });

        Self {
            request_tx,
            status,
            last_result,
            completed,
        }
    }

    /// Hands a snapshot to the worker. The canvas can keep changing meanwhile;
    /// the exported picture is the one captured in `snapshot`.
    ///
    /// Fails only when the worker has stopped.
    pub fn request_export(
        &self,
        snapshot: CanvasSnapshot,
        destination: ExportDestination,
        save_config: FileSaveConfig,
    ) -> Result<(), ExportError> {
        let request = ExportRequest {
            snapshot,
            destination,
            save_config,
        };

        self.request_tx
            .send(request)
            .map_err(|_| ExportError::ManagerClosed)
    }

    /// Where the latest export stands.
    pub async fn status(&self) -> ExportStatus {
        self.status.lock().await.clone()
    }

    /// Takes the finished outcome, if any, leaving the slot empty.
    pub async fn take_result(&self) -> Option<ExportOutcome> {
        self.last_result.lock().await.take()
    }

    /// Like `take_result`, for event loops that poll without an async context.
    /// Returns `None` while the worker holds the lock.
    pub fn try_take_result(&self) -> Option<ExportOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }

    /// Waits for the next finished export and takes its outcome.
    pub async fn wait_for_result(&self) -> ExportOutcome {
        loop {
            let notified = self.completed.notified();
            if let Some(outcome) = self.take_result().await {
                return outcome;
            }
            notified.await;
        }
    }

    /// Back to `Idle`, e.g. once the UI has dismissed the "File saved" notice.
    pub async fn reset(&self) {
        *self.status.lock().await = ExportStatus::Idle;
    }
}

#[cfg(test)]
impl ExportManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<ExportRequest>();
        drop(rx);
        Self {
            request_tx: tx,
            status: Arc::new(Mutex::new(ExportStatus::Idle)),
            last_result: Arc::new(Mutex::new(None)),
            completed: Arc::new(Notify::new()),
        }
    }
}
