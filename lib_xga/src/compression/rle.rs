use thiserror::Error;

use crate::palette::ColorIndex;

#[derive(Error, Debug)]
pub enum RleCompressionError {
    #[error("invalid input length: data is empty")]
    EmptyInput,
}

#[derive(Error, Debug)]
pub enum RleDecompressionError {
    #[error("invalid input length: data is empty")]
    EmptyInput,
    #[error("run #{0} has a length of zero")]
    ZeroLengthRun(usize),
}

/// One maximal stretch of identical cells in scanline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub count: u32,
    pub color: ColorIndex,
}

/// Compresses a scanline-ordered index buffer into runs.
///
/// # Arguments
/// * `indices` - Cells in scanline order (rows top-to-bottom, left-to-right)
///
/// # Returns
/// * `Result<Vec<Run>, RleCompressionError>` - Runs in order, or an error
///
/// A run breaks whenever the color changes; runs of length 1 are kept. The
/// final run is always flushed, so the counts sum to the input length.
pub fn rle_compress(indices: &[ColorIndex]) -> Result<Vec<Run>, RleCompressionError> {
    let Some((&first, rest)) = indices.split_first() else {
        return Err(RleCompressionError::EmptyInput);
    };

    let mut runs = Vec::new();
    let mut count = 1u32;
    let mut last = first;

    for &color in rest {
        if color == last {
            count += 1;
        } else {
            runs.push(Run { count, color: last });
            count = 1;
            last = color;
        }
    }

    runs.push(Run { count, color: last });
    Ok(runs)
}

/// Expands runs back into the scanline-ordered index buffer.
pub fn rle_decompress(runs: &[Run]) -> Result<Vec<ColorIndex>, RleDecompressionError> {
    if runs.is_empty() {
        return Err(RleDecompressionError::EmptyInput);
    }

    let mut decoded = Vec::new();
    for (position, run) in runs.iter().enumerate() {
        if run.count == 0 {
            return Err(RleDecompressionError::ZeroLengthRun(position));
        }
        decoded.extend(std::iter::repeat(run.color).take(run.count as usize));
    }

    Ok(decoded)
}
