use crate::constants::{LOSSLESS_QUALITY, MAX_QUALITY, MIN_QUALITY, WEBP_EXTENSION};
use crate::error::{ConversionError, Result};
use image::ImageReader;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use webp::Encoder;

/// Destination path for `input` inside `output_dir`: the input's base name
/// with its extension replaced by `.webp`.
pub fn webp_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_stem = input
        .file_stem()
        .ok_or_else(|| ConversionError::InvalidFileName(input.to_path_buf()))?;

    let output_filename = format!("{}.{}", file_stem.to_string_lossy(), WEBP_EXTENSION);
    Ok(output_dir.join(output_filename))
}

/// Converts a single image file to WebP, keeping the smaller of a lossless
/// and a lossy encoding.
///
/// # Arguments
/// * `input` - Path to the source image file
/// * `output_dir` - Directory the `.webp` file is written to (created if
///   missing)
/// * `quality` - Quality for the lossy attempt (1-100)
///
/// # Returns
/// * `Ok(path)` - Path to the written `.webp` file
/// * `Err(ConversionError)` - If the source is missing, not a decodable
///   image, the encoder rejects it, or the output cannot be written
///
/// The output is written to a temporary file in the destination directory
/// and renamed into place, so a failed conversion never leaves a partial
/// `.webp` behind. An existing destination file is overwritten.
pub fn convert_to_webp(input: &Path, output_dir: &Path, quality: u8) -> Result<PathBuf> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(ConversionError::InvalidQuality(quality));
    }
    if !input.exists() {
        return Err(ConversionError::FileNotFound(input.to_path_buf()));
    }

    // Sniff the format from the file contents, falling back to the
    // extension, so a misnamed file still decodes.
    let img = ImageReader::open(input)?.with_guessed_format()?.decode()?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let encoder = Encoder::from_rgba(rgba.as_raw(), width, height);

    let lossless = encoder
        .encode_simple(true, LOSSLESS_QUALITY)
        .map_err(|e| ConversionError::WebpEncoding(format!("{:?}", e)))?;
    let lossy = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|e| ConversionError::WebpEncoding(format!("{:?}", e)))?;

    // Ties go to lossless: exact pixels at the same cost.
    let (bytes, mode) = if lossless.len() <= lossy.len() {
        (&*lossless, "lossless")
    } else {
        (&*lossy, "lossy")
    };
    log::debug!(
        "{}: lossless {} bytes, lossy {} bytes, keeping {}",
        input.display(),
        lossless.len(),
        lossy.len(),
        mode
    );

    fs::create_dir_all(output_dir)
        .map_err(|_| ConversionError::DirectoryCreationFailed(output_dir.to_path_buf()))?;
    let output_path = webp_output_path(input, output_dir)?;

    let mut temp = NamedTempFile::new_in(output_dir)?;
    temp.write_all(bytes)?;
    temp.persist(&output_path)
        .map_err(|e| ConversionError::Io(e.error))?;

    log::info!(
        "Converted {} -> {} ({} bytes, {})",
        input.display(),
        output_path.display(),
        bytes.len(),
        mode
    );

    Ok(output_path)
}
