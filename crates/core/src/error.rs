//! Error types for the huffpack system.
//!
//! All operations return structured errors rather than panicking.
//! The core never terminates the process; exit codes are decided by
//! the outermost caller.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Format: malformed archive (bad magic, bad tag, non-canonical lengths)
/// - Bit I/O: reading bits from an exhausted stream
/// - Huffman: codec construction or encode/decode consistency failures
/// - CounterOverflow: a frequency counter saturated during scanning
/// - I/O: file system or stream operations
#[derive(Debug, Error)]
pub enum Error {
    /// Archive format violation
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Bit-level I/O failed (e.g., payload truncated mid-code)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Huffman codec error (e.g., missing code, invalid tree shape)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Frequency counter would wrap past its representable maximum
    #[error("frequency counter overflow for symbol {symbol}")]
    CounterOverflow { symbol: u16 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Archive format errors.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The 2-byte magic at offset 0 does not match
    #[error("invalid archive magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 2], actual: [u8; 2] },

    /// Entry tag byte is neither the file nor the directory constant
    #[error("unrecognized entry tag {0:#04x}")]
    UnknownTag(u8),

    /// Length table does not reduce to exactly one root (Kraft violation)
    #[error("non-canonical length table: reduction left {nodes} nodes")]
    NonCanonicalLengths { nodes: usize },

    /// Stream ended inside a structure that cannot be partial
    #[error("archive truncated inside {0}")]
    Truncated(&'static str),

    /// Entry path bytes are not valid UTF-8
    #[error("entry path is not valid UTF-8")]
    InvalidPathBytes,

    /// Paths are stored NUL-terminated, so interior NUL is unsupported
    #[error("entry path contains a NUL byte: {0:?}")]
    PathContainsNul(String),

    /// Symbol outside the [0, 256] alphabet
    #[error("symbol {0} out of range")]
    SymbolOutOfRange(u16),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// The byte stream ended in the middle of a code walk
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
}

/// Huffman codec errors.
///
/// These indicate internal consistency violations: a code table and the
/// data it encodes always come from the same scan, so hitting one of
/// these means a bug rather than bad user input.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// A symbol to encode has no entry in the code table
    #[error("no code assigned to symbol {0}")]
    MissingCode(u16),

    /// Code length must fit the one-byte length table entry
    #[error("code length {length} for symbol {symbol} exceeds maximum 255")]
    CodeLengthTooLong { symbol: u16, length: usize },

    /// The same symbol appears as more than one leaf
    #[error("symbol {0} appears as more than one leaf")]
    DuplicateLeaf(u16),

    /// A code tree must have an internal node as its root
    #[error("code tree root is a bare leaf")]
    LeafRoot,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
