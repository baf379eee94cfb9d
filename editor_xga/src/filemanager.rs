use std::path::PathBuf;

use image::{ImageError, RgbImage};
use lib_xga::constants::{FILE_EXT, FORMAT_NAME};
use lib_xga::image::decoder::DecodeError;
use lib_xga::image::encoder::EncodeError;
use lib_xga::{Palette, XgaImage};
use thiserror::Error;

use crate::config;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File dialog was canceled")]
    DialogCanceled,

    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),

    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}

pub fn open_image() -> Result<(PathBuf, XgaImage), FileError> {
    let path = rfd::FileDialog::new()
        .add_filter(FORMAT_NAME, &[FILE_EXT])
        .pick_file()
        .ok_or(FileError::DialogCanceled)?;

    let image = XgaImage::load(&path)?;
    Ok((path, image))
}

pub fn save_image_as(image: &XgaImage) -> Result<PathBuf, FileError> {
    let path = rfd::FileDialog::new()
        .add_filter(FORMAT_NAME, &[FILE_EXT])
        .save_file()
        .ok_or(FileError::DialogCanceled)?;

    let path = config::ensure_extension(&path.to_string_lossy());
    image.save(&path)?;
    Ok(path)
}

/// Expands the 4-bit indices through the palette and writes a PNG.
pub fn export_png(source: &XgaImage, palette: &Palette) -> Result<PathBuf, FileError> {
    let path = rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .save_file()
        .ok_or(FileError::DialogCanceled)?;
    let path = if path.extension().is_some() {
        path
    } else {
        path.with_extension("png")
    };

    let buffer = RgbImage::from_fn(source.width, source.height, |x, y| {
        let index = source.pixels[(y * source.width + x) as usize];
        let color = palette.color(index);
        image::Rgb([color.r, color.g, color.b])
    });
    buffer.save(&path)?;

    Ok(path)
}
