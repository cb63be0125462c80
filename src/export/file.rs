//! Writing exported images to disk.

use super::types::ExportError;
use crate::config::ExportConfig;
use crate::util::expand_tilde;
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save drawings to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for FileSaveConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("DrawingPad"),
            filename_template: "DrawingPad_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

impl FileSaveConfig {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: config.format.clone(),
        }
    }
}

/// Whether every chrono specifier in `template` is recognised.
pub fn is_valid_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Generate a filename based on the template and current time.
pub fn generate_filename(template: &str, format: &str) -> Result<String, ExportError> {
    if !is_valid_template(template) {
        return Err(ExportError::InvalidTemplate(template.to_string()));
    }
    let mut filename = String::new();
    write!(filename, "{}.{}", Local::now().format(template), format)
        .map_err(|_| ExportError::InvalidTemplate(template.to_string()))?;
    Ok(filename)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized directory path.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Picks `name` inside `directory`, adding `_1`, `_2`, ... before the
/// extension if a file with that name already exists.
fn unique_path(directory: &Path, name: &str) -> PathBuf {
    let candidate = directory.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    };
    (1..)
        .map(|n| match ext {
            Some(ext) => directory.join(format!("{stem}_{n}.{ext}")),
            None => directory.join(format!("{stem}_{n}")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Save encoded image data to a new file and return its path.
pub fn save_image(image_data: &[u8], config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
    let filename = generate_filename(&config.filename_template, &config.format)?;
    let directory = ensure_directory_exists(&config.save_directory)?;
    let file_path = unique_path(&directory, &filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::info!("Drawing saved: {}", file_path.display());

    Ok(file_path)
}
