pub mod bits;
pub mod error;
pub mod huffman;
pub mod lz77;

pub use error::{Error, Result};
pub use huffman::{compress, decompress};
pub use lz77::Token;
