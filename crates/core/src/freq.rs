//! Symbol frequency counting over the fixed 257-symbol alphabet.
//!
//! Symbols 0-255 are literal byte values; symbol 256 is the reserved
//! end-of-payload sentinel. One table is built per file by a full
//! byte scan plus a single forced sentinel increment, consumed once
//! by the tree builder, then discarded.

use crate::error::{Error, FormatError, Result};
use std::io::Read;

/// Number of distinct symbols: 256 byte values plus the sentinel.
pub const ALPHABET_SIZE: usize = 257;

/// Reserved end-of-payload symbol, never present in decoded output.
pub const EOF_SYMBOL: u16 = 256;

/// Histogram of symbol occurrences.
///
/// Counters never silently wrap: incrementing past `u64::MAX` fails
/// with `Error::CounterOverflow`.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Create a table with all counters at zero.
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Build a table by scanning every byte of `input`, then force-
    /// incrementing the sentinel exactly once. Guarantees at least one
    /// nonzero counter even for an empty input.
    pub fn from_reader<R: Read>(mut input: R) -> Result<Self> {
        let mut table = Self::new();
        let mut buf = [0u8; 8192];
        loop {
            match input.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &buf[..n] {
                        table.increment(byte as u16)?;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        table.increment(EOF_SYMBOL)?;
        Ok(table)
    }

    /// Increment the counter for `symbol`.
    ///
    /// # Errors
    /// - `FormatError::SymbolOutOfRange` if symbol > 256
    /// - `Error::CounterOverflow` if the counter is saturated
    pub fn increment(&mut self, symbol: u16) -> Result<()> {
        let index = Self::check(symbol)?;
        self.counts[index] = self.counts[index]
            .checked_add(1)
            .ok_or(Error::CounterOverflow { symbol })?;
        Ok(())
    }

    /// Return the count for `symbol` (0 if never incremented).
    ///
    /// # Errors
    /// `FormatError::SymbolOutOfRange` if symbol > 256.
    pub fn get(&self, symbol: u16) -> Result<u64> {
        Ok(self.counts[Self::check(symbol)?])
    }

    /// Iterate over `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u16, count))
    }

    fn check(symbol: u16) -> Result<usize> {
        if (symbol as usize) < ALPHABET_SIZE {
            Ok(symbol as usize)
        } else {
            Err(FormatError::SymbolOutOfRange(symbol).into())
        }
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}
