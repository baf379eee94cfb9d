use std::io;

use log::{debug, info};
use thiserror::Error;

use crate::compression::rle::{rle_compress, RleCompressionError};
use crate::palette::ColorIndex;

use super::format::MAGIC_HEADER;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("pixel buffer holds {actual} indices, header declares {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
    #[error("failed to compress pixel data")]
    CompressionFailed(#[from] RleCompressionError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Serializes a scanline-ordered pixel grid into the `.xga` text format:
///
/// ```text
/// xga-1;
/// <width>x<height>;
/// <count>:<colorIndex>;
/// ```
///
/// with one line per run.
pub fn encode(width: u32, height: u32, pixels: &[ColorIndex]) -> Result<String, EncodeError> {
    let expected = (width * height) as usize;
    if pixels.len() != expected {
        return Err(EncodeError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let runs = rle_compress(pixels)?;
    debug!(
        "compressed {}x{} image into {} runs",
        width,
        height,
        runs.len()
    );

    let mut encoded = String::with_capacity(MAGIC_HEADER.len() + 16 + runs.len() * 8);
    encoded.push_str(MAGIC_HEADER);
    encoded.push('\n');
    encoded.push_str(&format!("{}x{};\n", width, height));
    for run in &runs {
        encoded.push_str(&format!("{}:{};\n", run.count, run.color));
    }

    info!(
        "encoded {}x{} image: {} runs, {} bytes",
        width,
        height,
        runs.len(),
        encoded.len()
    );
    Ok(encoded)
}
