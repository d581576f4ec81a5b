use proptest::prelude::*;
use std::path::{Path, PathBuf};
use webp_squeeze::{
    convert_to_webp, destination_dir, is_supported_image, webp_output_path, ConversionError,
};

proptest! {
    #[test]
    fn is_supported_image_recognizes_extensions(
        extension in prop::sample::select(&[
            "jpg", "jpeg", "png", "bmp", "tif", "tiff", "gif", "webp", "txt", "doc", "pdf",
        ])
    ) {
        let filename = format!("test.{}", extension);
        let expected = matches!(
            extension,
            "jpg" | "jpeg" | "png" | "bmp" | "tif" | "tiff" | "gif"
        );
        prop_assert_eq!(is_supported_image(Path::new(&filename)), expected);
    }

    #[test]
    fn quality_outside_range_is_rejected(quality in 0u8..=255u8) {
        // Quality is validated before the source file is touched, so a
        // nonexistent path distinguishes the two failure modes.
        let result = convert_to_webp(Path::new("/nonexistent/missing.jpg"), Path::new("out"), quality);
        if quality == 0 || quality > 100 {
            prop_assert!(matches!(result, Err(ConversionError::InvalidQuality(_))));
        } else {
            prop_assert!(matches!(result, Err(ConversionError::FileNotFound(_))));
        }
    }

    #[test]
    fn output_path_replaces_extension_with_webp(
        stem in "[a-zA-Z0-9_-]{1,12}",
        extension in prop::sample::select(&["jpg", "jpeg", "png", "bmp", "gif"])
    ) {
        let input = PathBuf::from(format!("{}.{}", stem, extension));
        let output = webp_output_path(&input, Path::new("out")).unwrap();

        prop_assert_eq!(output.extension().and_then(|e| e.to_str()), Some("webp"));
        prop_assert_eq!(output.file_stem().and_then(|s| s.to_str()), Some(stem.as_str()));
        prop_assert_eq!(output.parent(), Some(Path::new("out")));
    }

    #[test]
    fn destination_mirrors_subdirectories(
        sub in "[a-z]{1,8}",
        name in "[a-z]{1,8}"
    ) {
        let input_root = PathBuf::from("input");
        let file = input_root.join(&sub).join(format!("{}.png", name));

        let dest = destination_dir(&file, &input_root, Some(Path::new("out")));
        prop_assert_eq!(dest, Path::new("out").join(&sub));
    }

    #[test]
    fn destination_without_root_is_source_parent(
        sub in "[a-z]{1,8}",
        name in "[a-z]{1,8}"
    ) {
        let input_root = PathBuf::from("input");
        let file = input_root.join(&sub).join(format!("{}.png", name));

        let dest = destination_dir(&file, &input_root, None);
        prop_assert_eq!(dest, file.parent().unwrap().to_path_buf());
    }
}
