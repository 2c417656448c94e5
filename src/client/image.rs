//! Image pre-processing before upload
//!
//! Photos are shrunk so the longest side fits a bound, flattened onto white
//! and re-encoded as JPEG. Anything that fails to decode is sent untouched.

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{
    codecs::jpeg::JpegEncoder,
    imageops::{self, FilterType},
    DynamicImage, Rgba, RgbaImage, RgbImage,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Longest side for photos sent to `identifyObject`
pub const IDENTIFY_MAX_DIMENSION: u32 = 800;
/// Longest side for photos sent to `generateSticker`
pub const STICKER_MAX_DIMENSION: u32 = 512;
/// JPEG quality used for re-encoding
pub const JPEG_QUALITY: u8 = 70;

static DATA_URL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/(png|jpeg|jpg|webp);base64,").expect("Invalid data URL regex")
});

/// Strip an image data-URL prefix, leaving bare base64
pub fn clean_base64(input: &str) -> Cow<'_, str> {
    DATA_URL_PREFIX.replace(input, "")
}

/// Target size so the longest side is at most `max_dimension`
///
/// Aspect ratio is preserved with the short side rounded to the nearest
/// pixel. Sizes already within the bound are returned unchanged.
pub fn fit_within(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let scale = |side: u32, long: u32| -> u32 {
        ((f64::from(side) * f64::from(max_dimension) / f64::from(long)).round() as u32).max(1)
    };

    if width > height {
        if width > max_dimension {
            return (max_dimension, scale(height, width));
        }
    } else if height > max_dimension {
        return (scale(width, height), max_dimension);
    }
    (width, height)
}

/// Base64 payload of a data URL or of a bare base64 string
fn decode_payload(input: &str) -> Option<Vec<u8>> {
    let payload = match input.strip_prefix("data:") {
        Some(rest) => rest.split_once(";base64,")?.1,
        None => input,
    };
    BASE64.decode(payload.trim()).ok()
}

/// Composite over an opaque white background
fn flatten_on_white(image: &DynamicImage) -> RgbImage {
    let white = Rgba([255, 255, 255, 255]);
    let mut canvas = RgbaImage::from_pixel(image.width(), image.height(), white);
    imageops::overlay(&mut canvas, &image.to_rgba8(), 0, 0);
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

fn try_resize(input: &str, max_dimension: u32) -> Option<String> {
    let bytes = decode_payload(input)?;
    let image = image::load_from_memory(&bytes).ok()?;

    let (width, height) = fit_within(image.width(), image.height(), max_dimension);
    let flattened = flatten_on_white(&image);
    let resized = if (width, height) == flattened.dimensions() {
        flattened
    } else {
        imageops::resize(&flattened, width, height, FilterType::Triangle)
    };

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode_image(&resized)
        .ok()?;

    Some(format!("data:image/jpeg;base64,{}", BASE64.encode(jpeg)))
}

/// Resize and re-encode an image given as a data URL or bare base64
///
/// Returns a `data:image/jpeg;base64,...` URL, or the input unchanged when it
/// cannot be decoded as an image.
pub fn resize_image(input: &str, max_dimension: u32) -> String {
    match try_resize(input, max_dimension) {
        Some(resized) => resized,
        None => {
            debug!(len = input.len(), "Image could not be decoded, sending as-is");
            input.to_string()
        }
    }
}
