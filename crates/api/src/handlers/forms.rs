//! Multipart form intake shared by the image-carrying entity forms
//! (categories, subcategories, products, blogs).
//!
//! Text fields and image parts are read fully before anything is sent
//! upstream; image constraints are enforced here so an invalid upload
//! never produces a backend call.

use std::collections::HashMap;

use axum::extract::Multipart;
use bloomcart_core::upload::validate_image;
use bloomcart_upstream::UpstreamError;

use crate::error::{AppError, AppResult};

/// One validated image part from a form submission.
pub struct ImagePart {
    /// Form field name (e.g. `"image"`, `"images"`).
    pub field: String,
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Parsed multipart submission: text fields plus validated images.
pub struct FormPayload {
    fields: HashMap<String, String>,
    pub images: Vec<ImagePart>,
}

impl FormPayload {
    /// Take a text field, trimmed; empty values count as absent.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields
            .remove(name)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Take a text field, defaulting to empty (validation rejects it later
    /// with a field-specific message instead of a generic parse error).
    pub fn take_or_default(&mut self, name: &str) -> String {
        self.take(name).unwrap_or_default()
    }
}

/// Read a multipart request into a [`FormPayload`].
///
/// Parts with a filename are treated as image uploads and validated
/// (size, content type); parts without one are text fields. A file part
/// with an empty filename and no content is a cleared file input and is
/// skipped.
pub async fn read_form(mut multipart: Multipart) -> AppResult<FormPayload> {
    let mut fields = HashMap::new();
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_owned) {
            Some(filename) => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;

                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }

                validate_image(&filename, &content_type, bytes.len())?;
                images.push(ImagePart {
                    field: name,
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            None => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read field: {e}")))?;
                fields.insert(name, text);
            }
        }
    }

    Ok(FormPayload { fields, images })
}

/// Build the upstream multipart form from validated text fields and images.
pub fn into_upstream_form(
    texts: Vec<(&'static str, String)>,
    images: Vec<ImagePart>,
) -> AppResult<reqwest::multipart::Form> {
    let mut form = reqwest::multipart::Form::new();

    for (name, value) in texts {
        form = form.text(name, value);
    }

    for image in images {
        let part = reqwest::multipart::Part::bytes(image.bytes)
            .file_name(image.filename)
            .mime_str(&image.content_type)
            .map_err(|e| AppError::Upstream(UpstreamError::Request(e)))?;
        form = form.part(image.field, part);
    }

    Ok(form)
}
