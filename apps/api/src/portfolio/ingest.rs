//! Resume submission pipeline.
//!
//! The handler collects multipart fields; this module owns what happens
//! next: file-type gates, persistence, text extraction, the blank-document
//! check, and classification into the draft returned to the client.

use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::sections::ResumeSections;
use crate::portfolio::storage;
use crate::state::AppState;

/// Accepted photo extensions, lowercased.
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
const RESUME_EXTENSION: &str = "pdf";

/// The draft returned after a submission: profile fields as given, plus the
/// classified resume content flattened in as `skills`, `projects` and
/// `education`. Clients may edit any of it before asking for a render, so
/// the same shape comes back in generation requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDraft {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(flatten)]
    pub sections: ResumeSections,
}

/// Lowercased extension of a client-supplied file name.
fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Validates and stores an optional profile photo, returning the public URL
/// it will be served under.
pub async fn store_photo(
    config: &Config,
    file_name: &str,
    data: Bytes,
) -> Result<String, AppError> {
    let extension = file_extension(file_name)
        .filter(|ext| PHOTO_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| {
            AppError::Validation("Profile photo must be a JPG or PNG file.".to_string())
        })?;

    let stored = storage::save_file(&config.upload_dir, &extension, data).await?;
    Ok(format!("/uploads/{stored}"))
}

/// Stores the resume, extracts its text and classifies it into sections.
///
/// Failure order matters here: an extraction failure surfaces as the
/// unreadable-document condition, and an extraction that succeeds with
/// whitespace-only text is the separate blank-document condition. The
/// classifier itself cannot fail.
pub async fn ingest_resume(
    state: &AppState,
    file_name: &str,
    data: Bytes,
) -> Result<ResumeSections, AppError> {
    if file_extension(file_name).as_deref() != Some(RESUME_EXTENSION) {
        return Err(AppError::Validation(
            "Only PDF resumes are supported.".to_string(),
        ));
    }

    let stored = storage::save_file(&state.config.upload_dir, RESUME_EXTENSION, data).await?;
    let path = state.config.upload_dir.join(&stored);

    let text = state.text_source.extract_text(&path).await?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyDocument);
    }

    let scan = state.extractor.scan(&text);
    if !scan.unclassified.is_empty() {
        debug!(
            resume = %stored,
            dropped = scan.unclassified.len(),
            "lines outside any tracked section were left unclassified"
        );
    }
    info!(
        resume = %stored,
        skills = scan.sections.skills.len(),
        projects = scan.sections.projects.len(),
        education = scan.sections.education.len(),
        "resume classified"
    );

    Ok(scan.sections)
}
