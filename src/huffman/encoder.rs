use crate::bits::BitWriter;
use crate::huffman::canonical;
use crate::huffman::tree::HuffmanTree;
use crate::huffman::{ALPHABET_SIZE, END_OF_STREAM, HEADER_LEN};

/// Compress `input` into a self-describing buffer: the 257-byte
/// code-length table followed by the bit-packed payload.
///
/// Every input byte is emitted through the canonical table, then the
/// end-of-stream code, then zero padding to the final byte boundary.
pub fn compress(input: &[u8]) -> Vec<u8> {
    let tree = HuffmanTree::build(input);
    let entries = canonical::assign(tree.code_lengths());
    let packed = canonical::pack(&entries);

    // Symbol-indexed lookup; absent symbols keep (0, 0) and are never
    // referenced because the tree covers every byte that occurs.
    let mut codes = vec![(0u64, 0u8); ALPHABET_SIZE];
    for entry in &entries {
        codes[entry.symbol as usize] = (entry.code, entry.len);
    }

    let mut writer = BitWriter::with_capacity(HEADER_LEN + input.len() / 2 + 1);
    writer.write_bytes(&packed);

    for &byte in input {
        let (code, len) = codes[byte as usize];
        writer.write_bits(code, len);
    }
    let (code, len) = codes[END_OF_STREAM as usize];
    writer.write_bits(code, len);

    writer.finish()
}
