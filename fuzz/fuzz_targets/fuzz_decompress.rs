#![no_main]

use huffpack::huffman;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decompression may reject arbitrary input - that's OK.
    // We're looking for panics/crashes, not errors.
    let _ = huffman::decompress(data);
});
