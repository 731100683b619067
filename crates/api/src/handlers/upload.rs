//! Handler for image uploads referenced by `imageUrl` QR payloads.

use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::json;

use qrforge_core::CoreError;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_base_url;
use crate::state::AppState;

/// POST /api/upload-image
///
/// Accept a multipart upload, store the `file` field under the uploads
/// directory with a sanitized, time-prefixed name, and return its public
/// URL. Empty files (and requests without a `file` field) are rejected
/// with 400.
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> AppResult<Json<serde_json::Value>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if data.is_empty() {
            return Err(AppError::BadRequest("file is empty".to_string()));
        }

        let filename = format!(
            "{}-{}",
            chrono::Utc::now().timestamp_millis(),
            sanitize_filename(&original)
        );

        let uploads_dir = &state.config.uploads_dir;
        tokio::fs::create_dir_all(uploads_dir)
            .await
            .map_err(CoreError::Io)?;
        tokio::fs::write(uploads_dir.join(&filename), &data)
            .await
            .map_err(CoreError::Io)?;

        tracing::info!(%filename, bytes = data.len(), "Stored uploaded asset");

        let base_url = resolve_base_url(&state.config, &headers);
        return Ok(Json(json!({
            "url": format!("{base_url}/uploads/{filename}"),
        })));
    }

    Err(AppError::BadRequest("file is empty".to_string()))
}

/// Reduce a client-supplied filename to its final path component and
/// replace anything outside `[A-Za-z0-9._-]` so it is safe to store and
/// to embed in a URL.
fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.chars().all(|c| c == '.' || c == '_') {
        "upload".to_string()
    } else {
        cleaned
    }
}
