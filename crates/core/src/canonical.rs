//! Canonical code (de)serialization: tree <-> per-symbol length table.
//!
//! A prefix tree is transmitted as 257 length bytes instead of its
//! full shape. `tree_from_lengths` is a pure function of the table:
//! identical tables always reconstruct structurally identical trees,
//! regardless of the frequencies that produced them, so the encoder
//! and the decoder agree as long as both run it.
//!
//! The encoder therefore also routes through this module: it derives
//! lengths from the greedy tree, rebuilds the canonical tree from
//! those lengths, and encodes with the rebuilt tree's codes.

use crate::error::{FormatError, HuffmanError, Result};
use crate::freq::ALPHABET_SIZE;
use crate::tree::Node;

/// Per-symbol code lengths; 0 means the symbol is absent.
pub type LengthTable = [u8; ALPHABET_SIZE];

/// Derive the length table from a tree: each leaf's depth becomes its
/// entry, unvisited symbols stay 0.
///
/// # Errors
/// - `HuffmanError::LeafRoot` if the root is a bare leaf
/// - `HuffmanError::CodeLengthTooLong` if a leaf sits deeper than 255
/// - `HuffmanError::DuplicateLeaf` / `FormatError::SymbolOutOfRange`
///   for malformed trees
pub fn lengths_from_tree(root: &Node) -> Result<LengthTable> {
    if matches!(root, Node::Leaf { .. }) {
        return Err(HuffmanError::LeafRoot.into());
    }
    let mut lengths = [0u8; ALPHABET_SIZE];
    walk(root, 0, &mut lengths)?;
    Ok(lengths)
}

fn walk(node: &Node, depth: usize, lengths: &mut LengthTable) -> Result<()> {
    match node {
        Node::Internal { left, right } => {
            walk(left, depth + 1, lengths)?;
            walk(right, depth + 1, lengths)
        }
        Node::Leaf { symbol } => {
            let index = *symbol as usize;
            if index >= ALPHABET_SIZE {
                return Err(FormatError::SymbolOutOfRange(*symbol).into());
            }
            if lengths[index] != 0 {
                return Err(HuffmanError::DuplicateLeaf(*symbol).into());
            }
            if depth > u8::MAX as usize {
                return Err(HuffmanError::CodeLengthTooLong {
                    symbol: *symbol,
                    length: depth,
                }
                .into());
            }
            lengths[index] = depth as u8;
            Ok(())
        }
    }
}

/// Reconstruct the canonical tree from a length table alone.
///
/// Lengths are processed from the maximum down to 0. Each iteration
/// first pairs up the node list carried over from the previous
/// (longer) length two-at-a-time in order, then appends fresh leaves
/// for every symbol whose entry equals the current length, in
/// ascending symbol order. Processing length 0 last (no new leaves)
/// performs the final pairing into the single root.
///
/// # Errors
/// `FormatError::NonCanonicalLengths` if the multiset of lengths
/// violates the Kraft equality: an odd node count at any level, or a
/// final result that is not exactly one root.
pub fn tree_from_lengths(lengths: &LengthTable) -> Result<Node> {
    let max_length = lengths.iter().copied().fold(0, u8::max);

    let mut nodes: Vec<Node> = Vec::new();
    for level in (0..=max_length).rev() {
        if nodes.len() % 2 != 0 {
            return Err(FormatError::NonCanonicalLengths { nodes: nodes.len() }.into());
        }
        let mut merged = Vec::with_capacity(nodes.len() / 2);
        let mut pairs = nodes.into_iter();
        while let (Some(left), Some(right)) = (pairs.next(), pairs.next()) {
            merged.push(Node::Internal {
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        if level > 0 {
            for symbol in 0..ALPHABET_SIZE {
                if lengths[symbol] == level {
                    merged.push(Node::Leaf {
                        symbol: symbol as u16,
                    });
                }
            }
        }
        nodes = merged;
    }

    if nodes.len() != 1 {
        return Err(FormatError::NonCanonicalLengths { nodes: nodes.len() }.into());
    }
    nodes
        .pop()
        .ok_or_else(|| FormatError::NonCanonicalLengths { nodes: 0 }.into())
}
