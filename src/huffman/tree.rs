use crate::error::{Error, Result};
use crate::huffman::canonical::{CodeEntry, MAX_CODE_LEN};
use crate::huffman::{ALPHABET_SIZE, END_OF_STREAM};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// One node in the tree arena. A node is a leaf exactly when it
/// carries a symbol.
struct Node {
    symbol: Option<u16>,
    frequency: u64,
    left: Option<usize>,
    right: Option<usize>,
}

/// Frequency-weighted strict binary tree over the 257-symbol alphabet,
/// stored as an index arena.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Build the coding tree for `input`.
    ///
    /// The end-of-stream symbol participates with frequency exactly 1
    /// regardless of the input, so every tree can terminate a payload.
    pub fn build(input: &[u8]) -> Self {
        let mut freq = [0u64; ALPHABET_SIZE];
        for &b in input {
            freq[b as usize] += 1;
        }
        freq[END_OF_STREAM as usize] = 1;

        let mut nodes = Vec::new();
        let mut heap = BinaryHeap::new();
        for (symbol, &f) in freq.iter().enumerate() {
            if f > 0 {
                let id = nodes.len();
                nodes.push(Node {
                    symbol: Some(symbol as u16),
                    frequency: f,
                    left: None,
                    right: None,
                });
                heap.push(Reverse((f, id)));
            }
        }

        // Combine the two lowest-frequency subtrees until one root
        // remains; the first node popped becomes the left child.
        while heap.len() > 1 {
            let Reverse((_, a)) = heap.pop().unwrap();
            let Reverse((_, b)) = heap.pop().unwrap();
            let combined = nodes[a].frequency + nodes[b].frequency;
            let id = nodes.len();
            nodes.push(Node { symbol: None, frequency: combined, left: Some(a), right: Some(b) });
            heap.push(Reverse((combined, id)));
        }

        let Reverse((_, root)) = heap.pop().expect("end-of-stream symbol always present");
        Self { nodes, root }
    }

    /// Rebuild a decoding tree from canonical code entries.
    ///
    /// Codes are walked from bit 0 of their stored (reversed) value,
    /// which replays them in canonical MSB-first order. A code that
    /// passes through or lands on an existing leaf means the table
    /// carries more codes than its lengths allow.
    pub fn from_codes(entries: &[CodeEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyCodeTable);
        }

        let mut nodes =
            vec![Node { symbol: None, frequency: 0, left: None, right: None }];
        let root = 0;

        for entry in entries {
            if entry.len > MAX_CODE_LEN {
                return Err(Error::InvalidCodeLength(entry.len));
            }
            let mut current = root;
            for i in 0..entry.len {
                if nodes[current].symbol.is_some() {
                    return Err(Error::HuffmanOversubscribed);
                }
                let bit = (entry.code >> i) & 1 == 1;
                let next = if bit { nodes[current].right } else { nodes[current].left };
                current = match next {
                    Some(id) => id,
                    None => {
                        let id = nodes.len();
                        nodes.push(Node { symbol: None, frequency: 0, left: None, right: None });
                        if bit {
                            nodes[current].right = Some(id);
                        } else {
                            nodes[current].left = Some(id);
                        }
                        id
                    }
                };
            }
            let node = &mut nodes[current];
            if node.symbol.is_some() || node.left.is_some() || node.right.is_some() {
                return Err(Error::HuffmanOversubscribed);
            }
            node.symbol = Some(entry.symbol);
        }

        Ok(Self { nodes, root })
    }

    /// Collect `(symbol, code length)` pairs by leaf depth.
    ///
    /// A lone root leaf still gets one bit on the wire; a zero-length
    /// code could never be read back.
    pub fn code_lengths(&self) -> Vec<(u16, u8)> {
        let mut pairs = Vec::new();
        self.collect_depths(self.root, 0, &mut pairs);
        pairs
    }

    fn collect_depths(&self, id: usize, depth: u8, pairs: &mut Vec<(u16, u8)>) {
        let node = &self.nodes[id];
        if let Some(symbol) = node.symbol {
            pairs.push((symbol, depth.max(1)));
        } else {
            if let Some(left) = node.left {
                self.collect_depths(left, depth + 1, pairs);
            }
            if let Some(right) = node.right {
                self.collect_depths(right, depth + 1, pairs);
            }
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Child of `id` along one payload bit: 0 = left, 1 = right.
    pub fn child(&self, id: usize, bit: bool) -> Option<usize> {
        let node = &self.nodes[id];
        if bit {
            node.right
        } else {
            node.left
        }
    }

    pub fn symbol_at(&self, id: usize) -> Option<u16> {
        self.nodes[id].symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_symbol_tree() {
        let tree = HuffmanTree::build(b"AAAA");
        let mut pairs = tree.code_lengths();
        pairs.sort();
        assert_eq!(pairs, vec![(b'A' as u16, 1), (END_OF_STREAM, 1)]);
    }

    #[test]
    fn test_empty_input_single_leaf() {
        let tree = HuffmanTree::build(b"");
        assert_eq!(tree.code_lengths(), vec![(END_OF_STREAM, 1)]);
    }

    #[test]
    fn test_frequent_symbols_get_short_codes() {
        let mut input = vec![b'a'; 1000];
        input.extend_from_slice(&[b'b'; 50]);
        input.extend_from_slice(b"cd");
        let tree = HuffmanTree::build(&input);
        let pairs = tree.code_lengths();
        let len_of = |sym: u16| pairs.iter().find(|(s, _)| *s == sym).unwrap().1;
        assert!(len_of(b'a' as u16) <= len_of(b'b' as u16));
        assert!(len_of(b'b' as u16) <= len_of(b'c' as u16));
    }

    #[test]
    fn test_from_codes_builds_decodable_tree() {
        // Two 1-bit codes: 0 -> end-of-stream, 1 -> 'A' (already in
        // transmission bit order)
        let entries = vec![
            CodeEntry { symbol: END_OF_STREAM, len: 1, code: 0 },
            CodeEntry { symbol: b'A' as u16, len: 1, code: 1 },
        ];
        let tree = HuffmanTree::from_codes(&entries).unwrap();
        let left = tree.child(tree.root(), false).unwrap();
        let right = tree.child(tree.root(), true).unwrap();
        assert_eq!(tree.symbol_at(left), Some(END_OF_STREAM));
        assert_eq!(tree.symbol_at(right), Some(b'A' as u16));
    }

    #[test]
    fn test_from_codes_rejects_duplicate_code() {
        let entries = vec![
            CodeEntry { symbol: 0, len: 2, code: 0b00 },
            CodeEntry { symbol: 1, len: 2, code: 0b00 },
        ];
        assert!(matches!(
            HuffmanTree::from_codes(&entries),
            Err(Error::HuffmanOversubscribed)
        ));
    }

    #[test]
    fn test_from_codes_rejects_prefix_collision() {
        // 0 is a prefix of 00: the longer code must walk through a leaf
        let entries = vec![
            CodeEntry { symbol: 0, len: 1, code: 0 },
            CodeEntry { symbol: 1, len: 2, code: 0 },
        ];
        assert!(matches!(
            HuffmanTree::from_codes(&entries),
            Err(Error::HuffmanOversubscribed)
        ));
    }

    #[test]
    fn test_from_codes_rejects_empty() {
        assert!(matches!(HuffmanTree::from_codes(&[]), Err(Error::EmptyCodeTable)));
    }

    #[test]
    fn test_from_codes_rejects_oversized_length() {
        let entries = vec![CodeEntry { symbol: 0, len: 80, code: 0 }];
        assert!(matches!(
            HuffmanTree::from_codes(&entries),
            Err(Error::InvalidCodeLength(80))
        ));
    }
}
