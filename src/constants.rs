pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Effort setting passed to the lossless encoder (0-100, higher tries harder
/// to shrink the output). Lossy quality comes from the caller instead.
pub const LOSSLESS_QUALITY: f32 = 75.0;

pub const WEBP_EXTENSION: &str = "webp";

/// Input extensions eligible for conversion. Matching is ASCII
/// case-insensitive, so `photo.JPG` is picked up as well.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tif", "tiff", "gif"];
