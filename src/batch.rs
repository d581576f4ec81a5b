use crate::constants::SUPPORTED_EXTENSIONS;
use crate::convert::{convert_to_webp, webp_output_path};
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Counters accumulated over one batch run. Skipped outputs (destination
/// already present) count as neither processed nor errored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub errored: usize,
}

/// Outcome of a single conversion job.
enum JobOutcome {
    Converted(PathBuf),
    Skipped(PathBuf),
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collects the supported image files under `input_dir`. Only the top level
/// is scanned unless `recursive` is set. Unreadable entries are logged and
/// skipped; no traversal order is guaranteed.
pub fn collect_image_files(input_dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let walker = if recursive {
        WalkDir::new(input_dir)
    } else {
        WalkDir::new(input_dir).max_depth(1)
    };

    let mut image_files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && is_supported_image(path) {
                    image_files.push(entry.into_path());
                }
            }
            Err(e) => log::warn!("Skipping unreadable entry: {}", e),
        }
    }

    image_files
}

/// Resolves the directory a converted file is written to.
///
/// With an output root, the file's parent relative to the input root is
/// recreated underneath it (in a non-recursive scan the relative parent is
/// empty, so everything lands in the root itself). Without one, the file is
/// written next to its source.
pub fn destination_dir(input_file: &Path, input_root: &Path, output_root: Option<&Path>) -> PathBuf {
    let parent = input_file.parent().unwrap_or(input_root);
    match output_root {
        None => parent.to_path_buf(),
        Some(root) => match parent.strip_prefix(input_root) {
            Ok(relative) => root.join(relative),
            // Discovered files always sit under the input root; anything
            // else was passed in directly and goes to the root as-is.
            Err(_) => root.to_path_buf(),
        },
    }
}

fn convert_one(input: &Path, output_dir: &Path, quality: u8) -> Result<JobOutcome> {
    let destination = webp_output_path(input, output_dir)?;
    if destination.exists() {
        return Ok(JobOutcome::Skipped(destination));
    }

    let written = convert_to_webp(input, output_dir, quality)?;
    Ok(JobOutcome::Converted(written))
}

/// Converts every supported image under `input_dir` to WebP, one file at a
/// time.
///
/// # Arguments
/// * `input_dir` - Directory to scan for convertible images
/// * `output_dir` - Optional destination root; defaults to writing next to
///   each source file
/// * `quality` - Quality for the lossy encoding attempt (1-100)
/// * `recursive` - Descend into subdirectories
///
/// # Returns
/// * `Ok(BatchSummary)` - Processed and errored counts for the run
///
/// A failing file is logged and counted but never aborts the batch, and a
/// destination that already exists is skipped without touching it, so
/// re-running over the same tree is cheap and idempotent.
pub fn batch_convert_images(
    input_dir: &Path,
    output_dir: Option<&Path>,
    quality: u8,
    recursive: bool,
) -> Result<BatchSummary> {
    let image_files = collect_image_files(input_dir, recursive);
    if image_files.is_empty() {
        log::warn!(
            "No supported image files found in {}",
            input_dir.display()
        );
        return Ok(BatchSummary::default());
    }

    log::info!("Found {} image file(s) to convert", image_files.len());

    let progress = ProgressBar::new(image_files.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    let mut summary = BatchSummary::default();
    for input in &image_files {
        let destination = destination_dir(input, input_dir, output_dir);
        match convert_one(input, &destination, quality) {
            Ok(JobOutcome::Converted(_)) => summary.processed += 1,
            Ok(JobOutcome::Skipped(existing)) => {
                log::debug!(
                    "Skipping {}: {} already exists",
                    input.display(),
                    existing.display()
                );
            }
            Err(e) => {
                log::error!("Failed to convert {}: {}", input.display(), e);
                summary.errored += 1;
            }
        }
        progress.inc(1);
    }
    progress.finish_with_message("✅ Batch conversion complete");

    log::info!(
        "Batch finished: {} converted, {} failed",
        summary.processed,
        summary.errored
    );

    Ok(summary)
}
