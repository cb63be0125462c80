//! Handing a saved drawing to an external share command.

use super::types::ExportError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs `command` with `path` appended as its final argument and waits for it.
///
/// The command is argv-style (`["xdg-open"]`, `["kdeconnect-cli", "--share"]`),
/// never passed through a shell.
pub fn share_with_command(command: &[String], path: &Path) -> Result<(), ExportError> {
    let Some((program, args)) = command.split_first() else {
        return Err(ExportError::Share("no share command configured".to_string()));
    };

    log::info!("Sharing {} via '{}'", path.display(), program);

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| ExportError::Share(format!("failed to launch '{program}': {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(ExportError::Share(format!("'{program}' exited with {status}")))
    }
}
