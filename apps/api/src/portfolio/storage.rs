//! Upload and artifact storage.
//!
//! Everything lands on the local filesystem: submitted files under the
//! upload directory, generated portfolio pages under the download
//! directory. Stored names are always a fresh UUID plus a vetted
//! extension, never a client-supplied name, and the download handler only
//! serves names this module could have produced.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;

/// Creates the upload and download directories if they are missing.
/// Called once at startup, before the listener binds.
pub fn ensure_dirs(config: &Config) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.upload_dir)
        .with_context(|| format!("creating upload dir {}", config.upload_dir.display()))?;
    std::fs::create_dir_all(&config.download_dir)
        .with_context(|| format!("creating download dir {}", config.download_dir.display()))?;
    info!(
        "Storage ready: uploads in {}, downloads in {}",
        config.upload_dir.display(),
        config.download_dir.display()
    );
    Ok(())
}

/// Writes `data` under `dir` as `<uuid>.<extension>` and returns the stored
/// file name. The write goes through a tempfile in the same directory, so a
/// crash mid-write never leaves a half-written file under the final name.
pub async fn save_file(dir: &Path, extension: &str, data: Bytes) -> Result<String, AppError> {
    let dir = dir.to_owned();
    let extension = extension.to_owned();
    tokio::task::spawn_blocking(move || write_file(&dir, &extension, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("storage task failed: {e}")))?
        .map_err(AppError::Storage)
}

fn write_file(dir: &Path, extension: &str, data: &[u8]) -> std::io::Result<String> {
    let file_name = format!("{}.{extension}", Uuid::new_v4());
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(dir.join(&file_name)).map_err(|e| e.error)?;
    Ok(file_name)
}

/// Reads a previously generated portfolio page, mapping a missing file to
/// the not-found error the download endpoint returns.
pub async fn read_download(dir: &Path, file_name: &str) -> Result<Vec<u8>, AppError> {
    match tokio::fs::read(dir.join(file_name)).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound("Portfolio HTML not found".to_string()))
        }
        Err(e) => Err(AppError::Storage(e)),
    }
}

/// True when `name` has the shape this module generates: a UUID stem, one
/// dot, an alphanumeric extension. Anything else, including every path
/// traversal spelling, is rejected before it reaches the filesystem.
pub fn is_generated_name(name: &str) -> bool {
    let Some((stem, extension)) = name.split_once('.') else {
        return false;
    };
    Uuid::parse_str(stem).is_ok()
        && !extension.is_empty()
        && extension.chars().all(|c| c.is_ascii_alphanumeric())
}
