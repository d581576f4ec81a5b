use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use webp_squeeze::cli::Args;
use webp_squeeze::{batch_convert_images, convert_to_webp, ConversionError, Result};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let input = args.input_path.as_path();

    if input.is_file() {
        let output_dir = match args.output_dir.as_deref() {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let output = convert_to_webp(input, &output_dir, args.quality)?;
        println!("✅ Successfully converted: {}", output.display());
    } else if input.is_dir() {
        let summary = batch_convert_images(
            input,
            args.output_dir.as_deref(),
            args.quality,
            args.recursive,
        )?;
        println!("✅ Processed {} file(s)", summary.processed);
        if summary.errored > 0 {
            println!("⚠️  {} file(s) failed to convert", summary.errored);
        }
    } else {
        return Err(ConversionError::InvalidInputPath(input.to_path_buf()));
    }

    Ok(())
}
