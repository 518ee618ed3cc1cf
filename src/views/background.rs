use std::path::Path;
use base64::{engine::general_purpose::STANDARD, Engine};
use crate::errors::{AppError, AppResult};

/// Reads a PNG and returns it as a CSS-ready `data:` URI.
pub fn data_uri(image_path: &str) -> AppResult<String> {
    let bytes = std::fs::read(Path::new(image_path)).map_err(|e| {
        tracing::error!("Failed to read background image {}: {}", image_path, e);
        AppError::ResourceMissing(image_path.to_string())
    })?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}
