use crate::constants::DEFAULT_QUALITY;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webp-squeeze",
    version,
    about = "Convert images to WebP using optimal compression",
    long_about = "webp-squeeze converts image files to the WebP format. Every file is encoded \
                  both lossless and lossy and the smaller result is kept. Point it at a single \
                  image or at a directory to convert everything inside.",
    after_help = "EXAMPLES:\n  \
    webp-squeeze photo.jpg\n  \
    webp-squeeze photo.jpg -o converted -q 90\n  \
    webp-squeeze ./photos -r -o ./webp\n  \
    webp-squeeze ./photos -v"
)]
pub struct Args {
    #[arg(
        value_name = "INPUT_PATH",
        help = "Input image file or directory",
        long_help = "Path to an image file or a directory. For a directory, every supported \
                     image inside is converted; outputs that already exist are skipped."
    )]
    pub input_path: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Output directory (defaults to the input file's directory)",
        long_help = "Destination root for the converted files. When converting a directory \
                     recursively, the input's relative structure is recreated underneath it. \
                     Without this option outputs are written next to their sources."
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100),
        help = "Quality for lossy compression (1-100)",
        long_help = "Quality for the lossy encoding attempt, from 1 (smallest) to 100 (best). \
                     The lossless attempt is unaffected; whichever result is smaller wins."
    )]
    pub quality: u8,

    #[arg(short = 'v', long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        short = 'r',
        long,
        help = "Process subdirectories recursively",
        long_help = "Descend into subdirectories when the input is a directory. Ignored for \
                     single-file input."
    )]
    pub recursive: bool,
}
