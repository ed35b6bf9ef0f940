//! Image upload constraints, enforced before anything is sent upstream.

use crate::error::CoreError;

/// Maximum accepted image size (2 MiB), matching the storefront's limit.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Content types the product and category forms accept.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

/// Validate an uploaded image part.
///
/// Rejects oversized files, empty files, and content types outside the
/// allow-list. The filename only appears in error messages.
pub fn validate_image(filename: &str, content_type: &str, len: usize) -> Result<(), CoreError> {
    if len == 0 {
        return Err(CoreError::Validation(format!(
            "Image '{filename}' is empty"
        )));
    }
    if len > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(format!(
            "Image '{filename}' exceeds the 2MB size limit"
        )));
    }
    if !ALLOWED_IMAGE_TYPES.contains(&content_type) {
        return Err(CoreError::Validation(format!(
            "Image '{filename}' has unsupported type '{content_type}'"
        )));
    }
    Ok(())
}
