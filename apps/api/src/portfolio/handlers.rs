use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::portfolio::ingest::{self, PortfolioDraft};
use crate::portfolio::render::{self, PortfolioTemplate};
use crate::portfolio::storage;
use crate::state::AppState;

/// One uploaded file from the submission form.
struct FilePart {
    file_name: String,
    data: Bytes,
}

/// Collected multipart fields, everything optional until validated.
#[derive(Default)]
struct SubmissionForm {
    name: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    linkedin: String,
    github: String,
    resume: Option<FilePart>,
    photo: Option<FilePart>,
}

async fn text_value(field: Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))
}

async fn file_value(field: Field<'_>) -> Result<Option<FilePart>, AppError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?;
    if file_name.is_empty() || data.is_empty() {
        // Browsers send an empty part for an unset optional file input
        return Ok(None);
    }
    Ok(Some(FilePart { file_name, data }))
}

async fn read_form(mut multipart: Multipart) -> Result<SubmissionForm, AppError> {
    let mut form = SubmissionForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "name" => form.name = Some(text_value(field).await?),
            "title" => form.title = Some(text_value(field).await?),
            "summary" => form.summary = Some(text_value(field).await?),
            "email" => form.email = Some(text_value(field).await?),
            "phone" => form.phone = Some(text_value(field).await?),
            "linkedin" => form.linkedin = text_value(field).await?,
            "github" => form.github = text_value(field).await?,
            "resume" => form.resume = file_value(field).await?,
            "photo" => form.photo = file_value(field).await?,
            _ => {}
        }
    }
    Ok(form)
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("Field '{field}' is required")))
}

/// POST /api/v1/portfolio/submit
pub async fn handle_submit(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PortfolioDraft>, AppError> {
    let form = read_form(multipart).await?;

    let name = required(form.name, "name")?;
    let title = required(form.title, "title")?;
    let summary = required(form.summary, "summary")?;
    let email = required(form.email, "email")?;
    let phone = required(form.phone, "phone")?;
    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("Field 'resume' is required".to_string()))?;

    let photo_url = match form.photo {
        Some(photo) => {
            Some(ingest::store_photo(&state.config, &photo.file_name, photo.data).await?)
        }
        None => None,
    };

    let sections = ingest::ingest_resume(&state, &resume.file_name, resume.data).await?;

    Ok(Json(PortfolioDraft {
        name,
        title,
        summary,
        email,
        phone,
        linkedin: form.linkedin,
        github: form.github,
        photo_url,
        sections,
    }))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub template: PortfolioTemplate,
    pub data: PortfolioDraft,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub filename: String,
    pub download_url: String,
    pub html: String,
}

/// POST /api/v1/portfolio/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let html = render::render_portfolio(req.template, &req.data);
    let filename =
        storage::save_file(&state.config.download_dir, "html", Bytes::from(html.clone())).await?;
    info!(template = req.template.as_str(), file = %filename, "portfolio page generated");
    Ok(Json(GenerateResponse {
        download_url: format!("/api/v1/portfolio/download/{filename}"),
        filename,
        html,
    }))
}

/// GET /api/v1/portfolio/download/:filename
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    if !storage::is_generated_name(&filename) {
        return Err(AppError::NotFound("Portfolio HTML not found".to_string()));
    }
    let bytes = storage::read_download(&state.config.download_dir, &filename).await?;
    let headers = [
        (header::CONTENT_TYPE, "text/html; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"MyPortfolio.html\"",
        ),
    ];
    Ok((headers, bytes).into_response())
}
