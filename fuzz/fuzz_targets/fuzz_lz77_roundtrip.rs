#![no_main]

use huffpack::lz77;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let tokens = lz77::compress(data);
    let restored = lz77::decompress(&tokens).expect("own token stream must replay");
    assert_eq!(restored, data);
});
