pub const FORMAT_NAME: &str = "XGA image";
pub const FILE_EXT: &str = "xga";

pub const MAX_WIDTH: u32 = 256;
pub const MAX_HEIGHT: u32 = 256;

pub const PALETTE_SIZE: usize = 16;
