use std::fs;
use std::path::Path;

use crate::palette::ColorIndex;

use super::decoder::{decode, DecodeError};
use super::encoder::{encode, EncodeError};

/// First line of every `.xga` file.
pub const MAGIC_HEADER: &str = "xga-1;";

/// A decoded (or to-be-encoded) image: dimensions plus the full pixel grid
/// in scanline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XgaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<ColorIndex>,
}

impl XgaImage {
    pub fn new(width: u32, height: u32, pixels: Vec<ColorIndex>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Encodes the image and overwrites `path` in full.
    pub fn save(&self, path: &Path) -> Result<(), EncodeError> {
        let text = encode(self.width, self.height, &self.pixels)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reads and decodes an `.xga` file.
    pub fn load(path: &Path) -> Result<Self, DecodeError> {
        let text = fs::read_to_string(path)?;
        decode(&text)
    }
}
