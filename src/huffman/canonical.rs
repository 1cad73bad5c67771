use crate::bits::reverse_bits;
use crate::error::{Error, Result};
use crate::huffman::HEADER_LEN;

/// Longest representable code: the packing accumulator is 64 bits
/// wide. A real tree only approaches this depth on astronomically
/// skewed inputs; tables claiming more are rejected as corrupt.
pub const MAX_CODE_LEN: u8 = 64;

/// One symbol's canonical code.
///
/// `code` is stored bit-reversed within `len`: canonical values are
/// assigned MSB-first, but the wire packs bits LSB-first, so the
/// stored form is ready for direct shift-and-pack use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeEntry {
    pub symbol: u16,
    pub len: u8,
    pub code: u64,
}

/// Assign canonical codes to `(symbol, length)` pairs.
///
/// Entries are ordered by ascending length with ties broken by
/// descending symbol value. The tie-break is format-defining: both
/// directions yield a valid prefix code, but only this one matches
/// the transmitted tables.
pub fn assign(mut pairs: Vec<(u16, u8)>) -> Vec<CodeEntry> {
    pairs.sort_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)));

    let mut entries = Vec::with_capacity(pairs.len());
    let mut code: u64 = 0;
    for (i, &(symbol, len)) in pairs.iter().enumerate() {
        entries.push(CodeEntry { symbol, len, code: reverse_bits(code, len) });
        if i + 1 < pairs.len() {
            let next_len = pairs[i + 1].1;
            code = code.wrapping_add(1) << (next_len - len);
        }
    }
    entries
}

/// Pack a code table into its transmitted form: one length byte per
/// alphabet symbol, zero where the symbol is absent. Code values are
/// never transmitted; the decoder re-derives them from lengths alone.
pub fn pack(entries: &[CodeEntry]) -> Vec<u8> {
    let mut packed = vec![0u8; HEADER_LEN];
    for entry in entries {
        packed[entry.symbol as usize] = entry.len;
    }
    packed
}

/// Reconstruct the code table from a transmitted length table.
///
/// Must yield exactly the table `assign` produced on the encode side;
/// that equivalence is what makes the lengths-only header sufficient.
pub fn unpack(table: &[u8]) -> Result<Vec<CodeEntry>> {
    debug_assert_eq!(table.len(), HEADER_LEN);

    let pairs: Vec<(u16, u8)> = table
        .iter()
        .enumerate()
        .filter(|(_, &len)| len > 0)
        .map(|(symbol, &len)| (symbol as u16, len))
        .collect();

    if pairs.is_empty() {
        return Err(Error::EmptyCodeTable);
    }
    validate_lengths(&pairs)?;

    Ok(assign(pairs))
}

/// Check the Kraft equality over a multiset of code lengths: the
/// lengths must describe a complete prefix code, neither over- nor
/// under-subscribed. A single-symbol table is exempt (the degenerate
/// one-leaf tree spends a full bit on its only code).
fn validate_lengths(pairs: &[(u16, u8)]) -> Result<()> {
    if pairs.len() == 1 {
        let len = pairs[0].1;
        if len > MAX_CODE_LEN {
            return Err(Error::InvalidCodeLength(len));
        }
        return Ok(());
    }

    let mut count = [0u32; MAX_CODE_LEN as usize + 1];
    for &(_, len) in pairs {
        if len > MAX_CODE_LEN {
            return Err(Error::InvalidCodeLength(len));
        }
        count[len as usize] += 1;
    }

    // Walk length levels tracking unassigned codes; going negative
    // means oversubscription, leftovers mean an incomplete code.
    let mut available: i64 = 1;
    for len in 1..=MAX_CODE_LEN as usize {
        available = available.saturating_mul(2) - count[len] as i64;
        if available < 0 {
            return Err(Error::HuffmanOversubscribed);
        }
    }
    if available != 0 {
        return Err(Error::HuffmanIncomplete);
    }
    Ok(())
}
