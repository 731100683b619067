//! Handlers for QR generation.
//!
//! `GET /api/qr` encodes a plain text query parameter; `POST /api/qr`
//! accepts a typed JSON body covering the five payload kinds (text, url,
//! vcard, social, imageUrl). Social and imageUrl payloads are turned into
//! disk-persisted landing pages whose URL is what the QR code encodes.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use qrforge_core::color::resolve_colors;
use qrforge_core::page::{self, SocialLinks};
use qrforge_core::qr::{render_png, DEFAULT_SIZE};
use qrforge_core::vcard::{render_vcard, VcardFields};
use qrforge_core::CoreError;

use crate::error::AppResult;
use crate::handlers::resolve_base_url;
use crate::state::AppState;

/// Query parameters for `GET /api/qr`.
#[derive(Debug, Deserialize)]
pub struct QrQuery {
    pub text: String,
    pub size: Option<i64>,
    pub theme: Option<String>,
    pub fg: Option<String>,
    pub bg: Option<String>,
}

/// JSON body for `POST /api/qr`.
///
/// Every field is optional; missing fields degrade to documented defaults
/// rather than rejecting the request. `payload` carries the per-kind field
/// bundle for `vcard` and `social`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    #[serde(deserialize_with = "coerce_size")]
    pub size: Option<i64>,
    pub theme: Option<String>,
    pub fg_color: Option<String>,
    pub bg_color: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub payload: Option<HashMap<String, String>>,
}

/// Accept any JSON number for `size`, truncating fractions to an integer.
/// The ≤0→300 clamp happens at render time.
fn coerce_size<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.map(|n| {
        n.as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0)
    }))
}

/// The closed set of payload kinds. Unrecognized or missing `type` strings
/// fall back to `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Text,
    Url,
    Vcard,
    Social,
    ImageUrl,
}

fn content_kind(content_type: Option<&str>) -> ContentKind {
    match content_type.map(|t| t.to_ascii_lowercase()).as_deref() {
        Some("url") => ContentKind::Url,
        Some("vcard") => ContentKind::Vcard,
        Some("social") => ContentKind::Social,
        Some("imageurl") => ContentKind::ImageUrl,
        _ => ContentKind::Text,
    }
}

/// GET /api/qr
///
/// Encode `text` into a PNG QR code. `theme`/`fg`/`bg` customize the
/// palette; malformed color input is silently ignored.
pub async fn generate_qr(Query(params): Query<QrQuery>) -> AppResult<impl IntoResponse> {
    let colors = resolve_colors(
        params.theme.as_deref(),
        params.fg.as_deref(),
        params.bg.as_deref(),
    );
    let png = render_png(&params.text, params.size.unwrap_or(DEFAULT_SIZE), colors)?;
    Ok(png_response(png))
}

/// POST /api/qr
///
/// Normalize the typed JSON body into a content string (possibly by
/// synthesizing a landing page), then render it. Color derivation is
/// independent of content derivation.
pub async fn generate_qr_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    let content = normalize_content(&state, &headers, &body).await?;
    let colors = resolve_colors(
        body.theme.as_deref(),
        body.fg_color.as_deref(),
        body.bg_color.as_deref(),
    );
    let png = render_png(&content, body.size.unwrap_or(DEFAULT_SIZE), colors)?;
    Ok(png_response(png))
}

fn png_response(png: Vec<u8>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], png)
}

/// Derive the content string to encode from the request body.
///
/// Missing fields never fail; they become empty strings. Page-backed kinds
/// (social, imageUrl) write an HTML document to the page store and return
/// its public URL as the content.
async fn normalize_content(
    state: &AppState,
    headers: &HeaderMap,
    body: &GenerateRequest,
) -> AppResult<String> {
    let empty = HashMap::new();
    let payload = body.payload.as_ref().unwrap_or(&empty);
    let field = |key: &str| payload.get(key).cloned().unwrap_or_default();

    match content_kind(body.content_type.as_deref()) {
        ContentKind::Text => Ok(body.text.clone().unwrap_or_default()),
        ContentKind::Url => Ok(body.url.clone().unwrap_or_default()),
        ContentKind::Vcard => Ok(render_vcard(&VcardFields {
            first_name: field("firstName"),
            last_name: field("lastName"),
            org: field("org"),
            title: field("title"),
            phone: field("phone"),
            email: field("email"),
            url: field("url"),
            address: field("address"),
        })),
        ContentKind::Social => {
            let html = page::render_social_page(&SocialLinks {
                facebook: field("facebook"),
                twitter: field("twitter"),
                instagram: field("instagram"),
                linkedin: field("linkedin"),
            });
            let base_url = resolve_base_url(&state.config, headers);
            persist_page(state, &html, &base_url).await
        }
        ContentKind::ImageUrl => {
            let image_path =
                page::extract_image_path(body.image_url.as_deref().unwrap_or_default());
            let base_url = resolve_base_url(&state.config, headers);
            let html = page::render_image_page(&base_url, &image_path);
            persist_page(state, &html, &base_url).await
        }
    }
}

/// Write a rendered landing page to the page store and return its public
/// URL. Directory creation is idempotent; a write failure fails the whole
/// request.
async fn persist_page(state: &AppState, html: &str, base_url: &str) -> AppResult<String> {
    let pages_dir = &state.config.pages_dir;
    tokio::fs::create_dir_all(pages_dir)
        .await
        .map_err(CoreError::Io)?;

    let id = page::page_id();
    let path = pages_dir.join(format!("{id}.html"));
    tokio::fs::write(&path, html).await.map_err(CoreError::Io)?;

    tracing::info!(page = %path.display(), "Generated landing page");
    Ok(format!("{base_url}/pages/{id}.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_and_missing_types_default_to_text() {
        assert_eq!(content_kind(None), ContentKind::Text);
        assert_eq!(content_kind(Some("barcode")), ContentKind::Text);
        assert_eq!(content_kind(Some("")), ContentKind::Text);
    }

    #[test]
    fn type_matching_is_case_insensitive() {
        assert_eq!(content_kind(Some("imageUrl")), ContentKind::ImageUrl);
        assert_eq!(content_kind(Some("IMAGEURL")), ContentKind::ImageUrl);
        assert_eq!(content_kind(Some("VCard")), ContentKind::Vcard);
        assert_eq!(content_kind(Some("Social")), ContentKind::Social);
        assert_eq!(content_kind(Some("URL")), ContentKind::Url);
    }

    #[test]
    fn body_accepts_camel_case_fields() {
        let body: GenerateRequest = serde_json::from_str(
            r##"{"type":"imageUrl","fgColor":"#112233","bgColor":"445566","imageUrl":"/uploads/x.jpg","size":200}"##,
        )
        .unwrap();
        assert_eq!(body.content_type.as_deref(), Some("imageUrl"));
        assert_eq!(body.fg_color.as_deref(), Some("#112233"));
        assert_eq!(body.bg_color.as_deref(), Some("445566"));
        assert_eq!(body.image_url.as_deref(), Some("/uploads/x.jpg"));
        assert_eq!(body.size, Some(200));
    }

    #[test]
    fn fractional_size_is_truncated_not_rejected() {
        let body: GenerateRequest = serde_json::from_str(r#"{"size":250.5}"#).unwrap();
        assert_eq!(body.size, Some(250));

        let body: GenerateRequest = serde_json::from_str(r#"{"size":-0.5}"#).unwrap();
        assert_eq!(body.size, Some(0)); // clamped to 300 at render time

        let body: GenerateRequest = serde_json::from_str(r#"{"size":200}"#).unwrap();
        assert_eq!(body.size, Some(200));
    }

    #[test]
    fn empty_body_parses_with_defaults() {
        let body: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(body.content_type.is_none());
        assert!(body.payload.is_none());
    }
}
