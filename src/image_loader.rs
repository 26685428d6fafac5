//! Blocking image loading for card references.
//!
//! Runs on rayon workers; never call from the Slint event loop.

use crate::config::HTTP_TIMEOUT;
use crate::error::{AppError, Result};
use log::debug;
use once_cell::sync::OnceCell;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Returns true for references fetched over HTTP rather than read from disk.
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// One client for all fetches so loads share its connection pool.
static HTTP_CLIENT: OnceCell<reqwest::blocking::Client> = OnceCell::new();

fn http_client() -> Result<&'static reqwest::blocking::Client> {
    let client = HTTP_CLIENT.get_or_try_init(|| {
        reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
    })?;
    Ok(client)
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let bytes = http_client()?
        .get(url)
        .send()?
        .error_for_status()?
        .bytes()?;
    Ok(bytes.to_vec())
}

fn decode_file(path: &Path) -> Result<image::DynamicImage> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .decode()?;
    Ok(img)
}

/// Loads and decodes an image reference into RGB8 bytes plus dimensions.
pub fn load_image_blocking(reference: &str) -> Result<(Vec<u8>, u32, u32)> {
    let start = std::time::Instant::now();

    let img = if is_remote(reference) {
        let bytes = fetch_bytes(reference)?;
        image::load_from_memory(&bytes)?
    } else {
        decode_file(Path::new(reference))?
    };

    let (width, height) = (img.width(), img.height());
    let data = img.to_rgb8().into_raw();

    debug!(
        "Decoded {} ({}x{}) in {:?}",
        reference,
        width,
        height,
        start.elapsed()
    );
    Ok((data, width, height))
}

/// Wraps decoded RGB8 data in a Slint image. Must run on the UI thread.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    Image::from_rgb8(buffer)
}
