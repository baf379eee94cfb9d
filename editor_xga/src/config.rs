use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

use lib_xga::constants::{FILE_EXT, MAX_HEIGHT, MAX_WIDTH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading input: {0}")]
    Io(#[from] io::Error),

    #[error("Not a number: {0}")]
    InvalidNumber(#[from] ParseIntError),

    #[error("Invalid size {width}x{height}: both sides must be between 1 and 256")]
    InvalidSize { width: i64, height: i64 },
}

/// Startup configuration, collected once from interactive prompts and
/// immutable afterwards.
pub struct EditorConfig {
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

impl EditorConfig {
    /// Prompts on stdin for the canvas size and the target file name.
    /// Invalid dimensions are fatal; the caller exits with status 1.
    pub fn from_prompts() -> Result<Self, ConfigError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        let width = prompt(&mut input, &format!("Canvas width (max {}): ", MAX_WIDTH))?;
        let width = parse_dimension(&width)?;
        let height = prompt(&mut input, &format!("Canvas height (max {}): ", MAX_HEIGHT))?;
        let height = parse_dimension(&height)?;
        let name = prompt(&mut input, "File name: ")?;

        let (width, height) = validate_size(width, height)?;

        Ok(Self {
            width,
            height,
            path: ensure_extension(name.trim()),
        })
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String, ConfigError> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Parsed as i64 so a negative entry reports "Invalid size" rather than a
/// parse failure.
pub fn parse_dimension(input: &str) -> Result<i64, ConfigError> {
    Ok(input.trim().parse::<i64>()?)
}

pub fn validate_size(width: i64, height: i64) -> Result<(u32, u32), ConfigError> {
    if width <= 0 || height <= 0 || width > i64::from(MAX_WIDTH) || height > i64::from(MAX_HEIGHT) {
        return Err(ConfigError::InvalidSize { width, height });
    }
    Ok((width as u32, height as u32))
}

/// Appends `.xga` unless the name already ends with it.
pub fn ensure_extension(name: &str) -> PathBuf {
    let path = PathBuf::from(name);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == FILE_EXT => path,
        _ => {
            let mut name = path.into_os_string();
            name.push(".");
            name.push(FILE_EXT);
            PathBuf::from(name)
        }
    }
}
