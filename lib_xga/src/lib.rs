pub mod canvas;
pub mod compression;
pub mod constants;
pub mod image;
pub mod palette;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::canvas::{Canvas, CanvasError};
pub use crate::image::format::XgaImage;
pub use crate::image::{decode, encode};
pub use crate::palette::{ColorIndex, Palette, Rgb};

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_xga"), LevelFilter::Debug)
        .filter(Some("editor_xga"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
