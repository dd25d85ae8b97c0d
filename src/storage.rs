// SPDX-License-Identifier: MPL-2.0

//! Partner image loading
//!
//! Every image is read and decoded once, before the carousel mounts, and
//! kept as RGBA for the whole session. Rotating between slides never
//! touches the filesystem again.

use crate::errors::{AppError, AssetError};
use crate::partners::Partner;
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Decoded RGBA image
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub rgba: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// RGBA at `(x, y)`, clamped to the image bounds
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if self.width == 0 || self.height == 0 {
            return [0, 0, 0, 0];
        }
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        let idx = ((y * self.width + x) * 4) as usize;
        match self.rgba.get(idx..idx + 4) {
            Some(px) => [px[0], px[1], px[2], px[3]],
            None => [0, 0, 0, 0],
        }
    }
}

/// Read and decode a single image
pub async fn load_image(path: PathBuf) -> Result<DecodedImage, AssetError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| AssetError::Read {
        path: path.clone(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Decoding partner image");

    // Decode to RGBA in blocking task
    let decode_path = path.clone();
    tokio::task::spawn_blocking(move || {
        let img = image::load_from_memory(&bytes).map_err(|e| AssetError::Decode {
            path: decode_path,
            message: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(DecodedImage {
            width,
            height,
            rgba: Arc::new(rgba.into_raw()),
        })
    })
    .await
    .map_err(|e| AssetError::Task(e.to_string()))?
}

/// Load every partner's image concurrently
///
/// The result has one entry per partner, in order. Partners without an
/// image, or whose image fails to load, get `None`; failures are logged and
/// the slide falls back to alt text.
pub async fn preload_images(partners: &[Partner]) -> Vec<Option<DecodedImage>> {
    let loads = partners.iter().map(|partner| {
        let image = partner.image.clone();
        async move {
            let path = image?;
            match load_image(path).await {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    warn!(error = %e, "Partner image unavailable");
                    None
                }
            }
        }
    });

    join_all(loads).await
}

/// [`preload_images`] for synchronous callers
pub fn preload_images_blocking(partners: &[Partner]) -> Result<Vec<Option<DecodedImage>>, AppError> {
    if partners.iter().all(|p| p.image.is_none()) {
        return Ok(vec![None; partners.len()]);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(preload_images(partners)))
}
