mod common;

use common::{indices, solid_grid, sprite, SPRITE_HEIGHT, SPRITE_WIDTH};
use lib_xga::image::decoder::DecodeError;
use lib_xga::{decode, encode, XgaImage};

#[test]
fn test_encode_default_2x2_grid() {
    // A freshly created canvas is all background (index 15): one run of 4.
    let text = encode(2, 2, &solid_grid(2, 2, 15)).unwrap();
    assert_eq!(text, "xga-1;\n2x2;\n4:15;\n");
}

#[test]
fn test_encode_3x1_run_break() {
    let text = encode(3, 1, &indices(&[2, 2, 5])).unwrap();
    assert_eq!(text, "xga-1;\n3x1;\n2:2;\n1:5;\n");
}

#[test]
fn test_encode_rejects_short_buffer() {
    let result = encode(4, 4, &indices(&[1, 2, 3]));
    assert!(matches!(
        result,
        Err(lib_xga::image::encoder::EncodeError::PixelCountMismatch {
            expected: 16,
            actual: 3,
        })
    ));
}

#[test]
fn test_encode_decode_sprite() {
    let pixels = sprite();
    let text = encode(SPRITE_WIDTH, SPRITE_HEIGHT, &pixels).unwrap();

    let decoded = decode(&text).unwrap();
    assert_eq!(decoded.width, SPRITE_WIDTH);
    assert_eq!(decoded.height, SPRITE_HEIGHT);
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn test_encode_decode_max_size() {
    let pixels = solid_grid(256, 256, 3);
    let text = encode(256, 256, &pixels).unwrap();

    let decoded = decode(&text).unwrap();
    assert_eq!(decoded.pixels.len(), 256 * 256);
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn test_decode_rejects_bad_magic() {
    assert!(matches!(
        decode("pxc-1;\n2x2;\n4:15;\n"),
        Err(DecodeError::InvalidHeader)
    ));
    assert!(matches!(decode(""), Err(DecodeError::InvalidHeader)));
}

#[test]
fn test_decode_rejects_bad_dimension_line() {
    assert!(matches!(
        decode("xga-1;\n2x2\n4:15;\n"),
        Err(DecodeError::DimensionParsingFailed)
    ));
    assert!(matches!(
        decode("xga-1;\ntwoxtwo;\n4:15;\n"),
        Err(DecodeError::DimensionParsingFailed)
    ));
    assert!(matches!(
        decode("xga-1;\n"),
        Err(DecodeError::DimensionParsingFailed)
    ));
}

#[test]
fn test_decode_rejects_out_of_range_dimensions() {
    assert!(matches!(
        decode("xga-1;\n0x4;\n0:15;\n"),
        Err(DecodeError::InvalidDimensions { width: 0, height: 4 })
    ));
    assert!(matches!(
        decode("xga-1;\n300x4;\n1200:15;\n"),
        Err(DecodeError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_decode_rejects_malformed_run() {
    assert!(matches!(
        decode("xga-1;\n2x2;\n4:15\n"),
        Err(DecodeError::MalformedRun { line: 3 })
    ));
    assert!(matches!(
        decode("xga-1;\n2x2;\n2:15;\nfour:15;\n"),
        Err(DecodeError::MalformedRun { line: 4 })
    ));
}

#[test]
fn test_decode_rejects_out_of_palette_index() {
    assert!(matches!(
        decode("xga-1;\n2x2;\n4:16;\n"),
        Err(DecodeError::InvalidColorIndex { value: 16, line: 3 })
    ));
}

#[test]
fn test_decode_rejects_pixel_count_mismatch() {
    // Runs cover 3 pixels, header declares 4.
    assert!(matches!(
        decode("xga-1;\n2x2;\n3:15;\n"),
        Err(DecodeError::PixelCountMismatch {
            expected: 4,
            actual: 3,
        })
    ));
    // Runs cover 5 pixels, header declares 4.
    assert!(matches!(
        decode("xga-1;\n2x2;\n5:15;\n"),
        Err(DecodeError::PixelCountMismatch { .. })
    ));
}

#[test]
fn test_save_load_round_trip() {
    let image = XgaImage::new(SPRITE_WIDTH, SPRITE_HEIGHT, sprite());

    let path = std::env::temp_dir().join("lib_xga_test_save_load.xga");
    image.save(&path).unwrap();

    let loaded = XgaImage::load(&path).unwrap();
    assert_eq!(loaded, image);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_save_overwrites_previous_content() {
    let path = std::env::temp_dir().join("lib_xga_test_overwrite.xga");

    let large = XgaImage::new(4, 4, solid_grid(4, 4, 1));
    large.save(&path).unwrap();
    let small = XgaImage::new(1, 1, solid_grid(1, 1, 2));
    small.save(&path).unwrap();

    // The file is truncated and rewritten in full, not appended to.
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "xga-1;\n1x1;\n1:2;\n");

    std::fs::remove_file(&path).ok();
}
