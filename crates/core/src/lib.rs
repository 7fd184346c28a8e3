//! huffpack-core: canonical Huffman codec and sequential archive framing
//!
//! This library provides the core components of a file/directory
//! archiver:
//! - Builds an optimal prefix code per file from a full byte scan
//! - Serializes the code in canonical form (257 length bytes per file)
//! - Packs encoded payloads plus a path manifest into one container
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries, leaf-first:
//! - `bitio`: bit-granularity reader/writer over byte streams
//! - `freq`: symbol histogram over the fixed 257-symbol alphabet
//! - `tree`: greedy optimal-tree construction and code derivation
//! - `canonical`: tree <-> code-length table, both directions
//! - `codec`: symbol encode/decode with sentinel termination
//! - `archive`: container framing over a directory tree
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable; the
//!   core never terminates the process
//! - **Deterministic**: tie-breaking and traversal orders are fixed,
//!   so identical input always produces bit-identical archives
//! - **Sequential**: one file at a time, two full passes per file;
//!   bit-level wrappers never own or close the shared stream

pub mod archive;
pub mod bitio;
pub mod canonical;
pub mod codec;
pub mod error;
pub mod freq;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
