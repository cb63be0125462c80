use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::time::{Duration, sleep, timeout};

use super::{
    dependencies::{ExportDependencies, ExportFileSaver, ImageEncoder, ShareTarget},
    file::FileSaveConfig,
    manager::ExportManager,
    pipeline::{ExportRequest, perform_export},
    snapshot::CanvasSnapshot,
    types::{ExportDestination, ExportError, ExportOutcome, ExportStatus},
};
use crate::draw::{Background, Point, RED, StrokeCanvas};

#[derive(Clone)]
struct MockEncoder {
    should_fail: bool,
    calls: Arc<Mutex<usize>>,
}

impl ImageEncoder for MockEncoder {
    fn encode(&self, snapshot: &CanvasSnapshot) -> Result<Vec<u8>, ExportError> {
        *self.calls.lock().unwrap() += 1;
        if self.should_fail {
            Err(ExportError::Encode("encoder failure".to_string()))
        } else {
            Ok(vec![snapshot.width() as u8, snapshot.height() as u8])
        }
    }
}

#[derive(Clone)]
struct MockSaver {
    should_fail: bool,
    path: PathBuf,
    saved: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl ExportFileSaver for MockSaver {
    fn save(&self, image_data: &[u8], _config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
        self.saved.lock().unwrap().push(image_data.to_vec());
        if self.should_fail {
            Err(ExportError::Save(std::io::Error::other("disk full")))
        } else {
            Ok(self.path.clone())
        }
    }
}

#[derive(Clone)]
struct MockShare {
    should_fail: bool,
    shared: Arc<Mutex<Vec<PathBuf>>>,
}

#[async_trait]
impl ShareTarget for MockShare {
    async fn share(&self, path: &Path) -> Result<(), ExportError> {
        self.shared.lock().unwrap().push(path.to_path_buf());
        if self.should_fail {
            Err(ExportError::Share("no receiver".to_string()))
        } else {
            Ok(())
        }
    }
}

struct Mocks {
    encoder: MockEncoder,
    saver: MockSaver,
    share: MockShare,
}

impl Mocks {
    fn new() -> Self {
        Self {
            encoder: MockEncoder {
                should_fail: false,
                calls: Arc::new(Mutex::new(0)),
            },
            saver: MockSaver {
                should_fail: false,
                path: PathBuf::from("/tmp/DrawingPad_test.png"),
                saved: Arc::new(Mutex::new(Vec::new())),
            },
            share: MockShare {
                should_fail: false,
                shared: Arc::new(Mutex::new(Vec::new())),
            },
        }
    }

    fn dependencies(&self) -> ExportDependencies {
        ExportDependencies {
            encoder: Arc::new(self.encoder.clone()),
            saver: Arc::new(self.saver.clone()),
            share: Arc::new(self.share.clone()),
        }
    }
}

fn sample_snapshot() -> CanvasSnapshot {
    let mut canvas = StrokeCanvas::new();
    canvas.begin_stroke(Point::new(1.0, 1.0), RED, 3.0);
    canvas.extend_stroke(Point::new(6.0, 4.0));
    canvas.end_stroke();
    CanvasSnapshot::capture(&canvas, &Background::default(), 8, 6).unwrap()
}

fn request(destination: ExportDestination) -> ExportRequest {
    ExportRequest {
        snapshot: sample_snapshot(),
        destination,
        save_config: FileSaveConfig::default(),
    }
}

#[tokio::test]
async fn perform_export_file_only_skips_share() {
    let mocks = Mocks::new();
    let result = perform_export(
        request(ExportDestination::FileOnly),
        Arc::new(mocks.dependencies()),
    )
    .await
    .unwrap();

    assert_eq!(result.saved_path, PathBuf::from("/tmp/DrawingPad_test.png"));
    assert_eq!(result.size_bytes, 2);
    assert!(!result.shared);
    assert_eq!(*mocks.encoder.calls.lock().unwrap(), 1);
    assert_eq!(*mocks.saver.saved.lock().unwrap(), vec![vec![8u8, 6u8]]);
    assert!(mocks.share.shared.lock().unwrap().is_empty());
}

#[tokio::test]
async fn perform_export_shares_saved_file() {
    let mocks = Mocks::new();
    let result = perform_export(
        request(ExportDestination::FileAndShare),
        Arc::new(mocks.dependencies()),
    )
    .await
    .unwrap();

    assert!(result.shared);
    assert_eq!(
        *mocks.share.shared.lock().unwrap(),
        vec![PathBuf::from("/tmp/DrawingPad_test.png")]
    );
}

#[tokio::test]
async fn perform_export_share_failure_still_succeeds() {
    let mut mocks = Mocks::new();
    mocks.share.should_fail = true;
    let result = perform_export(
        request(ExportDestination::FileAndShare),
        Arc::new(mocks.dependencies()),
    )
    .await
    .unwrap();

    assert!(!result.shared);
    assert_eq!(result.saved_path, PathBuf::from("/tmp/DrawingPad_test.png"));
    assert_eq!(mocks.share.shared.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn perform_export_save_failure() {
    let mut mocks = Mocks::new();
    mocks.saver.should_fail = true;
    let err = perform_export(
        request(ExportDestination::FileAndShare),
        Arc::new(mocks.dependencies()),
    )
    .await
    .unwrap_err();

    match err {
        ExportError::Save(_) => {}
        other => panic!("expected Save error, got {:?}", other),
    }
    assert!(mocks.share.shared.lock().unwrap().is_empty());
}

#[tokio::test]
async fn perform_export_encode_failure_skips_save() {
    let mut mocks = Mocks::new();
    mocks.encoder.should_fail = true;
    let err = perform_export(
        request(ExportDestination::FileOnly),
        Arc::new(mocks.dependencies()),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ExportError::Encode(_)));
    assert!(mocks.saver.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn perform_export_with_default_dependencies_writes_png() {
    let temp = tempfile::tempdir().unwrap();
    let mut export_request = request(ExportDestination::FileAndShare);
    export_request.save_config.save_directory = temp.path().to_path_buf();

    // No share command configured: the file is still saved
    let result = perform_export(export_request, Arc::new(ExportDependencies::default()))
        .await
        .unwrap();

    assert!(!result.shared);
    let bytes = std::fs::read(&result.saved_path).unwrap();
    assert_eq!(bytes.len(), result.size_bytes);
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    assert!(
        result
            .saved_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("DrawingPad_")
    );
}

#[tokio::test]
async fn export_manager_starts_idle() {
    let manager = ExportManager::new(&tokio::runtime::Handle::current());
    assert_eq!(manager.status().await, ExportStatus::Idle);
    assert!(manager.try_take_result().is_none());
}

#[tokio::test]
async fn export_manager_reports_success() {
    let mocks = Mocks::new();
    let manager =
        ExportManager::with_dependencies(&tokio::runtime::Handle::current(), mocks.dependencies());

    manager
        .request_export(
            sample_snapshot(),
            ExportDestination::FileAndShare,
            FileSaveConfig::default(),
        )
        .unwrap();

    let outcome = timeout(Duration::from_secs(5), manager.wait_for_result())
        .await
        .unwrap();
    match &outcome {
        ExportOutcome::Success(result) => assert!(result.shared),
        other => panic!("expected success, got {:?}", other),
    }
    assert_eq!(outcome.message(), "File saved at /tmp/DrawingPad_test.png");
    assert_eq!(manager.status().await, ExportStatus::Success);
    assert!(manager.try_take_result().is_none());
}

#[tokio::test]
async fn export_manager_records_failure_status() {
    let mut mocks = Mocks::new();
    mocks.saver.should_fail = true;
    let manager =
        ExportManager::with_dependencies(&tokio::runtime::Handle::current(), mocks.dependencies());

    manager
        .request_export(
            sample_snapshot(),
            ExportDestination::FileOnly,
            FileSaveConfig::default(),
        )
        .unwrap();

    let mut outcome = None;
    for _ in 0..50 {
        if let Some(result) = manager.try_take_result() {
            outcome = Some(result);
            break;
        }
        sleep(Duration::from_millis(20)).await;
    }

    match outcome {
        Some(ExportOutcome::Failed(msg)) => {
            assert!(msg.contains("disk full"));
        }
        other => panic!("expected failure outcome, got {:?}", other),
    }
    assert!(matches!(
        manager.status().await,
        ExportStatus::Failed(ref msg) if msg.contains("disk full")
    ));

    manager.reset().await;
    assert_eq!(manager.status().await, ExportStatus::Idle);
}

#[tokio::test]
async fn export_manager_processes_requests_in_order() {
    let mocks = Mocks::new();
    let manager =
        ExportManager::with_dependencies(&tokio::runtime::Handle::current(), mocks.dependencies());

    for _ in 0..3 {
        manager
            .request_export(
                sample_snapshot(),
                ExportDestination::FileOnly,
                FileSaveConfig::default(),
            )
            .unwrap();
        let outcome = timeout(Duration::from_secs(5), manager.wait_for_result())
            .await
            .unwrap();
        assert!(outcome.is_success());
    }
    assert_eq!(mocks.saver.saved.lock().unwrap().len(), 3);
}

#[test]
fn request_export_returns_error_when_channel_closed() {
    let manager = ExportManager::with_closed_channel_for_test();
    let err = manager
        .request_export(
            sample_snapshot(),
            ExportDestination::FileOnly,
            FileSaveConfig::default(),
        )
        .expect_err("should fail when channel closed");
    assert!(
        matches!(err, ExportError::ManagerClosed),
        "unexpected error variant: {err:?}"
    );
}
