//! Image upload model: accepted formats, decoded payloads, failure taxonomy.
//!
//! File reading and pixel decoding belong to an external collaborator; the
//! core only consumes the resolved data-URI + natural-dimension tuple. The
//! pipeline is one-shot and has no cancellation, so a result may land after
//! its element is gone; the coordinator guards that case.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image formats the upload flow accepts (`.jpg`, `.jpeg`, `.png`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// MIME type used in the data URI.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }

    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }
        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }
        None
    }
}

/// Failure modes of the one-shot read + decode pipeline. A failed upload
/// never mutates the store; the element keeps its upload-pending visual.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("file read failed: {0}")]
    Read(String),
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("image has no pixels")]
    EmptyImage,
}

/// The resolved output of the file-picker/decoder collaborator: the encoded
/// payload plus the image's natural pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedImage {
    /// `data:<mime>;base64,<payload>` URI stored as element content.
    pub data_uri: String,
    pub natural_width: u32,
    pub natural_height: u32,
}

impl DecodedImage {
    /// Assemble a decoded image from raw file bytes, detecting the format
    /// from its magic bytes.
    pub fn from_bytes(
        data: &[u8],
        natural_width: u32,
        natural_height: u32,
    ) -> Result<Self, UploadError> {
        if natural_width == 0 || natural_height == 0 {
            return Err(UploadError::EmptyImage);
        }
        let format = ImageFormat::from_magic_bytes(data)
            .ok_or_else(|| UploadError::UnsupportedFormat("unknown signature".to_string()))?;
        Ok(Self {
            data_uri: format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(data)),
            natural_width,
            natural_height,
        })
    }

    /// Natural aspect ratio (width over height).
    pub fn aspect_ratio(&self) -> f64 {
        self.natural_width as f64 / self.natural_height as f64
    }
}
