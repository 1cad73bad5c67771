use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // LZ77 errors
    #[error("Match cursor {pos} past searchable range of {len}-byte buffer")]
    CursorOutOfBounds { pos: usize, len: usize },

    #[error("Back-reference distance {distance} exceeds available output {available}")]
    InvalidBackReference { distance: u16, available: usize },

    // Huffman header errors
    #[error("Compressed input too short: {0} bytes, need full code-length table")]
    TruncatedHeader(usize),

    #[error("Code-length table has no symbols")]
    EmptyCodeTable,

    #[error("Invalid Huffman code length: {0} (max 64)")]
    InvalidCodeLength(u8),

    #[error("Huffman code oversubscribed: more codes than possible for bit length")]
    HuffmanOversubscribed,

    #[error("Huffman code incomplete: not all codes assigned")]
    HuffmanIncomplete,

    // Huffman payload errors
    #[error("Bit stream does not match any Huffman code")]
    InvalidCode,

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

pub type Result<T> = std::result::Result<T, Error>;
