use log::debug;
use thiserror::Error;

use crate::constants::{MAX_HEIGHT, MAX_WIDTH};
use crate::image::format::XgaImage;
use crate::palette::ColorIndex;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("invalid canvas size {width}x{height}: both sides must be between 1 and 256")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} cells, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// The in-memory grid of color indices being edited. Row-major, exactly
/// `width * height` cells, every cell in `0..=15`.
pub struct Canvas {
    cells: Vec<ColorIndex>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Creates a canvas filled with the background color (index 15).
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        debug!("creating {}x{} canvas", width, height);
        Ok(Self {
            cells: vec![ColorIndex::BACKGROUND; (width * height) as usize],
            width,
            height,
        })
    }

    pub fn from_image(image: &XgaImage) -> Result<Self, CanvasError> {
        let mut canvas = Self::new(image.width, image.height)?;
        if image.pixels.len() != canvas.cells.len() {
            return Err(CanvasError::PixelCountMismatch {
                expected: canvas.cells.len(),
                actual: image.pixels.len(),
            });
        }
        canvas.cells.copy_from_slice(&image.pixels);
        Ok(canvas)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sets the cell at (x, y). Out-of-bounds coordinates are ignored.
    pub fn paint(&mut self, x: u32, y: u32, color: ColorIndex) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = color;
    }

    /// Resets the cell at (x, y) to the background color.
    pub fn erase(&mut self, x: u32, y: u32) {
        self.paint(x, y, ColorIndex::BACKGROUND);
    }

    pub fn get(&self, x: u32, y: u32) -> Option<ColorIndex> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y * self.width + x) as usize])
    }

    /// The full grid in scanline order, as the encoder consumes it.
    pub fn indices(&self) -> &[ColorIndex] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(ColorIndex::BACKGROUND);
    }

    pub fn to_image(&self) -> XgaImage {
        XgaImage::new(self.width, self.height, self.cells.clone())
    }
}
