//! Image compression for album uploads.
//!
//! Camera originals are far too large for the storage slots, so every
//! selected file is decoded, downscaled to a bounding box and re-encoded as
//! JPEG before it becomes part of an album. The output is a self-contained
//! data URI that can be stored and rendered directly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use tokio::task::JoinSet;

/// Longest allowed edge of a stored image. Sources inside the box are kept
/// at their native size; we never upscale.
pub const MAX_DIMENSION: u32 = 1280;

/// JPEG quality factor for re-encoded images.
pub const JPEG_QUALITY: u8 = 70;

/// Compress raw image bytes into a `data:image/jpeg;base64,…` string.
///
/// Fails if the bytes do not decode as an image; nothing is written
/// anywhere on failure.
pub fn compress_bytes(bytes: &[u8]) -> Result<String> {
    let decoded =
        image::load_from_memory(bytes).context("failed to decode image data")?;
    let bounded = bound_dimensions(decoded);

    let rgb = bounded.to_rgb8();
    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .context("failed to encode image as JPEG")?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg)))
}

/// Compress a single image file from disk.
pub fn compress_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read image file {}", path.display()))?;
    compress_bytes(&bytes)
        .with_context(|| format!("failed to compress image {}", path.display()))
}

/// Compress a whole selection concurrently, one blocking worker per file.
///
/// All-or-nothing: the first failure aborts the remaining workers and
/// propagates a single error. On success the result preserves the selection
/// order.
pub async fn compress_batch(paths: Vec<PathBuf>) -> Result<Vec<String>> {
    let mut workers = JoinSet::new();
    for (index, path) in paths.into_iter().enumerate() {
        workers.spawn_blocking(move || (index, compress_file(&path)));
    }

    let mut encoded = Vec::with_capacity(workers.len());
    while let Some(joined) = workers.join_next().await {
        let (index, result) = joined.context("image compression worker panicked")?;
        match result {
            Ok(uri) => encoded.push((index, uri)),
            Err(err) => {
                workers.abort_all();
                return Err(err);
            }
        }
    }

    encoded.sort_by_key(|entry| entry.0);
    Ok(encoded.into_iter().map(|(_, uri)| uri).collect())
}

/// Decode a stored data URI back into pixels. Used to validate persisted
/// values on load; a slot that fails here is treated as absent.
pub fn decode_data_uri(uri: &str) -> Result<DynamicImage> {
    let rest = uri
        .strip_prefix("data:")
        .context("stored image is not a data URI")?;
    let (_mime, payload) = rest
        .split_once(";base64,")
        .context("stored image is missing a base64 payload")?;
    let bytes = STANDARD
        .decode(payload)
        .context("stored image payload is not valid base64")?;
    image::load_from_memory(&bytes).context("stored image payload does not decode")
}

fn bound_dimensions(img: DynamicImage) -> DynamicImage {
    if img.width() <= MAX_DIMENSION && img.height() <= MAX_DIMENSION {
        return img;
    }
    img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3)
}
