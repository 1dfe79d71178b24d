//! Client-side checks for images sent to the detection endpoints.
//!
//! Validation runs before any bytes leave the browser. A rejected file never
//! produces a request.

use thiserror::Error;

/// Largest image accepted for upload (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Image is too large ({}). Maximum size is {}.", size_label(.size), size_label(.max))]
    TooLarge { size: u64, max: u64 },
    #[error("Please upload an image file")]
    NotAnImage { content_type: String },
    #[error("The selected file is empty")]
    Empty,
}

/// An image picked by the user, held in memory until it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Build an upload, inferring the content type from the file extension
    /// when the browser reported none.
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type
            .filter(|ct| !ct.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(&file_name).to_string());
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_metadata(&self.content_type, self.size())
    }
}

/// Check type and size before reading the file body. Used by the picker so
/// an oversized file is refused without loading it.
pub fn validate_metadata(content_type: &str, size: u64) -> Result<(), ValidationError> {
    if !content_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            content_type: content_type.to_string(),
        });
    }
    if size == 0 {
        return Err(ValidationError::Empty);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge {
            size,
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Content type guessed from a file name. Unknown extensions map to
/// `application/octet-stream`, which validation then rejects.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

fn size_label(bytes: &u64) -> String {
    human_size(*bytes)
}

/// `1.5 MB`, `320 KB`, `12 B`.
pub fn human_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.0} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_content_type_from_extension() {
        let upload = ImageUpload::new("Leaf.JPG", None, vec![1]);
        assert_eq!(upload.content_type, "image/jpeg");

        let upload = ImageUpload::new("notes.txt", Some(""), vec![1]);
        assert_eq!(upload.content_type, "application/octet-stream");
    }

    #[test]
    fn test_rejects_oversized_image() {
        let err = validate_metadata("image/png", MAX_IMAGE_BYTES + 1).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { .. }));
        assert!(err.to_string().contains("5.0 MB"));
        assert!(validate_metadata("image/png", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_non_images_and_empty_files() {
        assert_eq!(
            validate_metadata("application/pdf", 10),
            Err(ValidationError::NotAnImage {
                content_type: "application/pdf".into()
            })
        );
        assert_eq!(validate_metadata("image/png", 0), Err(ValidationError::Empty));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(12), "12 B");
        assert_eq!(human_size(320 * 1024), "320 KB");
        assert_eq!(human_size(3 * 1024 * 1024 / 2), "1.5 MB");
    }
}
