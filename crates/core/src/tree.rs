//! Prefix-code trees: greedy construction and code derivation.
//!
//! `build_tree` runs the classic greedy merge over a frequency table
//! and is deterministic: ties between equal-weight candidates are
//! broken by insertion sequence, with leaves inserted in ascending
//! symbol order before any merge happens. Two runs over identical
//! input therefore produce bit-identical archives.

use crate::error::{HuffmanError, Result};
use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node in a prefix-code tree.
///
/// The tree is a closed two-case sum: every internal node owns exactly
/// two children, every leaf carries one symbol. No sharing, no back
/// references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u16 },
    Internal { left: Box<Node>, right: Box<Node> },
}

/// Heap entry ordering: weight first, then insertion sequence.
#[derive(Debug)]
struct Candidate {
    weight: u64,
    seq: u32,
    node: Node,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the two minima
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// Build an optimal prefix tree for the given frequencies.
///
/// Every symbol with frequency > 0 enters as a singleton leaf. If
/// fewer than two entries exist (e.g., only the sentinel after
/// scanning an empty file), zero-frequency leaves are padded in
/// ascending symbol order until two exist: a valid prefix tree needs
/// at least two leaves. The two lowest-weight entries are merged
/// repeatedly until one remains.
///
/// The returned root is always an internal node.
pub fn build_tree(freqs: &FrequencyTable) -> Result<Node> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u32;

    for (symbol, weight) in freqs.iter() {
        if weight > 0 {
            heap.push(Candidate {
                weight,
                seq,
                node: Node::Leaf { symbol },
            });
            seq += 1;
        }
    }

    // Pad with unused symbols so the tree has >= 2 leaves
    let mut symbol = 0u16;
    while heap.len() < 2 && (symbol as usize) < ALPHABET_SIZE {
        if freqs.get(symbol)? == 0 {
            heap.push(Candidate {
                weight: 0,
                seq,
                node: Node::Leaf { symbol },
            });
            seq += 1;
        }
        symbol += 1;
    }

    while heap.len() > 1 {
        if let (Some(first), Some(second)) = (heap.pop(), heap.pop()) {
            heap.push(Candidate {
                weight: first.weight.saturating_add(second.weight),
                seq,
                node: Node::Internal {
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            });
            seq += 1;
        }
    }

    match heap.pop() {
        Some(Candidate {
            node: node @ Node::Internal { .. },
            ..
        }) => Ok(node),
        _ => Err(HuffmanError::LeafRoot.into()),
    }
}

/// Mapping from symbol to its code bits, derived from a tree by
/// depth-first traversal: 0 descends left, 1 descends right.
///
/// Codes are prefix-free by construction. A symbol absent from the
/// tree has no entry.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<Vec<bool>>>,
}

impl CodeTable {
    /// Derive the code table from a tree root.
    ///
    /// # Errors
    /// - `HuffmanError::DuplicateLeaf` if a symbol appears twice
    /// - `FormatError::SymbolOutOfRange` for a leaf outside the alphabet
    /// - `HuffmanError::LeafRoot` if the root is a bare leaf
    pub fn from_tree(root: &Node) -> Result<Self> {
        if matches!(root, Node::Leaf { .. }) {
            return Err(HuffmanError::LeafRoot.into());
        }
        let mut table = Self {
            codes: vec![None; ALPHABET_SIZE],
        };
        let mut prefix = Vec::new();
        table.collect(root, &mut prefix)?;
        Ok(table)
    }

    /// Return the code bits for `symbol`.
    ///
    /// # Errors
    /// `HuffmanError::MissingCode` if the symbol has no entry.
    pub fn code(&self, symbol: u16) -> Result<&[bool]> {
        self.codes
            .get(symbol as usize)
            .and_then(|c| c.as_deref())
            .ok_or_else(|| HuffmanError::MissingCode(symbol).into())
    }

    /// Iterate over populated `(symbol, code)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &[bool])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_deref().map(|bits| (i as u16, bits)))
    }

    fn collect(&mut self, node: &Node, prefix: &mut Vec<bool>) -> Result<()> {
        match node {
            Node::Internal { left, right } => {
                prefix.push(false);
                self.collect(left, prefix)?;
                prefix.pop();

                prefix.push(true);
                self.collect(right, prefix)?;
                prefix.pop();
                Ok(())
            }
            Node::Leaf { symbol } => {
                let index = *symbol as usize;
                if index >= ALPHABET_SIZE {
                    return Err(crate::error::FormatError::SymbolOutOfRange(*symbol).into());
                }
                if self.codes[index].is_some() {
                    return Err(HuffmanError::DuplicateLeaf(*symbol).into());
                }
                self.codes[index] = Some(prefix.clone());
                Ok(())
            }
        }
    }
}
