use crate::bits::BitReader;
use crate::error::{Error, Result};
use crate::huffman::canonical;
use crate::huffman::tree::HuffmanTree;
use crate::huffman::{END_OF_STREAM, HEADER_LEN};

/// Decompress a buffer produced by [`compress`](crate::huffman::compress).
///
/// The canonical table is re-derived from the length header, then the
/// payload is walked bit by bit (0 = left, 1 = right) until the
/// end-of-stream code. Trailing padding bits are ignored; a payload
/// that ends before the end-of-stream code is corrupt.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < HEADER_LEN {
        return Err(Error::TruncatedHeader(input.len()));
    }

    let entries = canonical::unpack(&input[..HEADER_LEN])?;
    let tree = HuffmanTree::from_codes(&entries)?;

    let mut reader = BitReader::new(&input[HEADER_LEN..]);
    let mut output = Vec::new();
    let mut node = tree.root();

    loop {
        let bit = reader.read_bit()?;
        node = tree.child(node, bit).ok_or(Error::InvalidCode)?;
        if let Some(symbol) = tree.symbol_at(node) {
            if symbol == END_OF_STREAM {
                break;
            }
            output.push(symbol as u8);
            node = tree.root();
        }
    }

    Ok(output)
}
