pub mod rle;

pub use rle::{rle_compress, rle_decompress, Run, RleCompressionError, RleDecompressionError};
