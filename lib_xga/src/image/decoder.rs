use std::io;

use log::{debug, error, info};
use thiserror::Error;

use crate::compression::rle::{rle_decompress, Run, RleDecompressionError};
use crate::constants::{MAX_HEIGHT, MAX_WIDTH};
use crate::palette::ColorIndex;

use super::format::{XgaImage, MAGIC_HEADER};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid format or header")]
    InvalidHeader,
    #[error("failed to parse image dimensions")]
    DimensionParsingFailed,
    #[error("dimensions {width}x{height} are outside the supported range")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("malformed run on line {line}")]
    MalformedRun { line: usize },
    #[error("color index {value} on line {line} is outside the palette")]
    InvalidColorIndex { value: u32, line: usize },
    #[error("run data covers {actual} pixels, header declares {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("decompression failed")]
    DecompressionFailed(#[from] RleDecompressionError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Parses the `.xga` text format written by [`super::encoder::encode`].
pub fn decode(text: &str) -> Result<XgaImage, DecodeError> {
    let mut lines = text.lines();

    // Magic line
    match lines.next() {
        Some(line) if line.trim_end() == MAGIC_HEADER => {}
        _ => {
            error!("invalid or missing magic line");
            return Err(DecodeError::InvalidHeader);
        }
    }
    debug!("magic line validated successfully");

    // Dimension line
    let dimension_line = lines.next().ok_or(DecodeError::DimensionParsingFailed)?;
    let (width, height) = parse_dimensions(dimension_line)?;
    if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
        error!("dimensions {}x{} are out of range", width, height);
        return Err(DecodeError::InvalidDimensions { width, height });
    }
    debug!("image dimensions read: width={} height={}", width, height);

    // Run lines; the magic and dimension lines come first, so runs start at
    // line 3.
    let mut runs = Vec::new();
    for (offset, line) in lines.enumerate() {
        runs.push(parse_run(line, offset + 3)?);
    }

    // Check the declared total before expanding, so a corrupt count fails
    // without a giant allocation.
    let expected = (width * height) as usize;
    let total: u64 = runs.iter().map(|run| u64::from(run.count)).sum();
    if total != expected as u64 {
        error!(
            "run data covers {} pixels, header declares {}",
            total, expected
        );
        return Err(DecodeError::PixelCountMismatch {
            expected,
            actual: total as usize,
        });
    }

    let pixels = rle_decompress(&runs)?;
    info!("decoded {}x{} image from {} runs", width, height, runs.len());

    Ok(XgaImage::new(width, height, pixels))
}

fn parse_dimensions(line: &str) -> Result<(u32, u32), DecodeError> {
    let body = line
        .trim_end()
        .strip_suffix(';')
        .ok_or(DecodeError::DimensionParsingFailed)?;
    let (width, height) = body
        .split_once('x')
        .ok_or(DecodeError::DimensionParsingFailed)?;

    let width = width.parse().map_err(|_| {
        error!("failed to parse width");
        DecodeError::DimensionParsingFailed
    })?;
    let height = height.parse().map_err(|_| {
        error!("failed to parse height");
        DecodeError::DimensionParsingFailed
    })?;

    Ok((width, height))
}

fn parse_run(line: &str, line_number: usize) -> Result<Run, DecodeError> {
    let body = line
        .trim_end()
        .strip_suffix(';')
        .ok_or(DecodeError::MalformedRun { line: line_number })?;
    let (count, color) = body
        .split_once(':')
        .ok_or(DecodeError::MalformedRun { line: line_number })?;

    let count: u32 = count
        .parse()
        .map_err(|_| DecodeError::MalformedRun { line: line_number })?;
    let value: u32 = color
        .parse()
        .map_err(|_| DecodeError::MalformedRun { line: line_number })?;

    let color = u8::try_from(value)
        .ok()
        .and_then(ColorIndex::new)
        .ok_or(DecodeError::InvalidColorIndex {
            value,
            line: line_number,
        })?;

    Ok(Run { count, color })
}
