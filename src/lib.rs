pub mod batch;
pub mod cli;
pub mod constants;
pub mod convert;
pub mod error;

pub use batch::{
    batch_convert_images, collect_image_files, destination_dir, is_supported_image, BatchSummary,
};
pub use convert::{convert_to_webp, webp_output_path};
pub use error::{ConversionError, Result};
