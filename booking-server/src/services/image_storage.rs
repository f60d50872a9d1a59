//! Image Storage
//!
//! Persists profile images uploaded as base64 JSON fields. Images are
//! validated, re-encoded to JPEG and stored under a content-hash filename,
//! so identical uploads share one file.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::DynamicImage;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::fs;

use crate::utils::AppError;

/// Maximum decoded file size (5MB)
const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// JPEG quality for stored profile images
const JPEG_QUALITY: u8 = 85;

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Re-encode an uploaded image as JPEG
fn compress_image(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img: DynamicImage = image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("Invalid image: {e}")))?;

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {e}")))?;
    }
    Ok(buffer)
}

/// Profile image store rooted at `work_dir/uploads/images`
#[derive(Clone)]
pub struct ImageStorage {
    images_dir: PathBuf,
}

impl ImageStorage {
    pub fn new(images_dir: PathBuf) -> Self {
        Self { images_dir }
    }

    /// Decode, validate and persist a base64 image payload
    ///
    /// Accepts both a raw base64 string and a `data:image/...;base64,`
    /// URL. Returns the stored reference (`uploads/images/<hash>.jpg`)
    /// recorded on the staff row.
    pub fn store_base64(&self, payload: &str) -> Result<String, AppError> {
        let encoded = match payload.split_once(',') {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => payload,
        };

        let data = BASE64
            .decode(encoded.trim())
            .map_err(|e| AppError::validation(format!("Invalid base64 image payload: {e}")))?;

        if data.is_empty() {
            return Err(AppError::validation("Empty image payload".to_string()));
        }
        if data.len() > MAX_IMAGE_SIZE {
            return Err(AppError::validation(format!(
                "Image too large ({} bytes, max {MAX_IMAGE_SIZE})",
                data.len()
            )));
        }

        let compressed = compress_image(&data)?;
        let hash = calculate_hash(&compressed);
        let filename = format!("{hash}.jpg");
        let path = self.images_dir.join(&filename);

        fs::create_dir_all(&self.images_dir)
            .map_err(|e| AppError::internal(format!("Failed to create images directory: {e}")))?;

        if !path.exists() {
            fs::write(&path, &compressed)
                .map_err(|e| AppError::internal(format!("Failed to save image: {e}")))?;
            tracing::info!(file = %filename, size = compressed.len(), "Image stored");
        }

        Ok(format!("uploads/images/{filename}"))
    }

    /// Delete a stored image file, best effort
    ///
    /// Callers check the reference count first; a missing file is not an
    /// error.
    pub fn remove(&self, stored: &str) {
        let Some(name) = Path::new(stored).file_name() else {
            return;
        };
        let path = self.images_dir.join(name);
        if path.exists() {
            match fs::remove_file(&path) {
                Ok(_) => tracing::info!(file = %name.to_string_lossy(), "Image disposed"),
                Err(e) => {
                    tracing::warn!(file = %name.to_string_lossy(), error = %e, "Failed to delete image")
                }
            }
        }
    }

    /// 获取图片文件路径
    pub fn image_path(&self, stored: &str) -> Option<PathBuf> {
        Path::new(stored)
            .file_name()
            .map(|name| self.images_dir.join(name))
    }
}
