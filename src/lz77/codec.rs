use crate::error::{Error, Result};
use crate::lz77::chain::HashChain;
use crate::lz77::tokens::Token;

/// Tokenize `input` into an LZ77 stream of literals and back-references.
///
/// Each compression run owns its own chain; nothing is shared across
/// calls.
pub fn compress(input: &[u8]) -> Vec<Token> {
    let mut chain = HashChain::new();
    let mut output = Vec::new();

    let mut i = 0;
    while i + 3 <= input.len() {
        // The cursor bound above upholds find_match's contract, so a
        // failure here cannot occur.
        let token = chain
            .find_match(input, i)
            .expect("cursor kept within searchable range");
        output.push(token);

        // Index every position the token consumed, as long as a full
        // 3-byte window still exists there. The cursor position itself
        // only enters the chain now, after matching against it.
        for j in 0..token.uncompressed_size() {
            if i + j + 3 <= input.len() {
                chain.insert(input[i + j], input[i + j + 1], input[i + j + 2], i + j);
            }
        }
        i += token.uncompressed_size();
    }

    // Fewer than 3 bytes remain: no hash possible, emit literals
    while i < input.len() {
        output.push(Token::Literal(input[i]));
        i += 1;
    }

    debug_assert!(
        decompress(&output).map(|d| d == input).unwrap_or(false),
        "token stream failed to replay to its own input"
    );

    output
}

/// Replay an LZ77 token stream into the original bytes.
///
/// Copies read from the growing output itself, one byte at a time, so
/// a copy may overlap the bytes it is writing (`length` larger than
/// `distance` expresses a repeated run).
pub fn decompress(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut output = Vec::new();

    for token in tokens {
        match *token {
            Token::Literal(byte) => output.push(byte),
            Token::Copy { length, distance } => {
                let src = (output.len())
                    .checked_sub(distance as usize)
                    .filter(|_| distance != 0)
                    .ok_or(Error::InvalidBackReference {
                        distance,
                        available: output.len(),
                    })?;
                for i in 0..length as usize {
                    output.push(output[src + i]);
                }
            }
        }
    }

    Ok(output)
}
