#![no_main]

use huffpack::huffman;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = huffman::compress(data);
    let restored = huffman::decompress(&compressed).expect("own output must decode");
    assert_eq!(restored, data);
});
