/// Thumbnail download and decoding
///
/// Each card's thumbnail is fetched once per search. Nothing is written to
/// disk and nothing survives the next search.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use reqwest::Client;
use thiserror::Error;
use tokio::task;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ThumbnailError {
    #[error("download failed: {0}")]
    Request(String),

    #[error("image server responded with HTTP {0}")]
    Status(u16),

    #[error("could not decode image: {0}")]
    Decode(String),
}

/// A decoded RGBA bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Decode image bytes, scaling down anything larger than `max_size`
pub fn decode(bytes: &[u8], max_size: u32) -> Result<Bitmap, ThumbnailError> {
    let img = image::load_from_memory(bytes).map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    let img = if img.width() > max_size || img.height() > max_size {
        img.resize(max_size, max_size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(Bitmap {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Download and decode a thumbnail
pub async fn fetch(http: Client, url: String, max_size: u32) -> Result<Handle, ThumbnailError> {
    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|e| ThumbnailError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ThumbnailError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ThumbnailError::Request(e.to_string()))?;

    // Decoding is CPU-bound, keep it off the executor
    let bitmap = task::spawn_blocking(move || decode(&bytes, max_size))
        .await
        .map_err(|e| ThumbnailError::Decode(format!("task join error: {}", e)))??;

    Ok(bitmap.into_handle())
}
