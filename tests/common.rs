use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a small real PNG so the converter has something to decode.
pub fn write_test_png(path: &Path) {
    let img = image::RgbaImage::from_fn(16, 16, |x, y| {
        image::Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Writes a small real JPEG (no alpha channel; the JPEG encoder rejects it).
pub fn write_test_jpeg(path: &Path) {
    let img = image::RgbImage::from_fn(16, 16, |x, y| {
        image::Rgb([(x * 16) as u8, (y * 16) as u8, 64])
    });
    img.save_with_format(path, image::ImageFormat::Jpeg).unwrap();
}

/// Writes a file with an image extension but undecodable contents.
pub fn write_corrupt_image(path: &Path) {
    File::create(path)
        .unwrap()
        .write_all(b"not an image")
        .unwrap();
}

/// Checks the RIFF/WEBP container signature.
pub fn is_webp_file(path: &Path) -> bool {
    let bytes = fs::read(path).unwrap();
    bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
}
