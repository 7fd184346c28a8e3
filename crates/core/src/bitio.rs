//! Bit-level views over byte-granularity streams.
//!
//! This module provides BitWriter and BitReader for serializing Huffman
//! codes. Both operate in MSB-first (most significant bit first) order,
//! which is standard for Huffman encoding.
//!
//! Neither type owns the underlying stream: an archive interleaves
//! bit-packed payloads with byte-level framing in the same stream, so
//! closing a bit-level wrapper must leave the stream usable for the
//! next entry.
//!
//! # Padding Rules
//! - BitWriter: `close()` pads the incomplete byte with trailing zeros,
//!   so output is always byte-aligned
//! - BitReader: end-of-data can only occur at a byte boundary, because
//!   bits are produced eight at a time from a one-byte buffer

use crate::error::Result;
use std::io::{Read, Write};

/// Writes bits MSB-first through a byte sink.
///
/// Accumulates bits in a one-byte buffer and flushes it to the sink
/// whenever 8 bits have been collected.
///
/// # Invariants
/// - `bit_count` is always < 8
/// - `byte_buffer` holds `bit_count` bits in its low end
#[derive(Debug)]
pub struct BitWriter<'a, W: Write> {
    /// Borrowed sink; stays open after `close()`
    sink: &'a mut W,
    /// Accumulator for the current partial byte
    byte_buffer: u8,
    /// Number of bits in byte_buffer (0-7)
    bit_count: u8,
}

impl<'a, W: Write> BitWriter<'a, W> {
    /// Create a BitWriter over the given byte sink.
    pub fn new(sink: &'a mut W) -> Self {
        Self {
            sink,
            byte_buffer: 0,
            bit_count: 0,
        }
    }

    /// Write a single bit to the stream.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.byte_buffer = (self.byte_buffer << 1) | bit as u8;
        self.bit_count += 1;
        if self.bit_count == 8 {
            self.sink.write_all(&[self.byte_buffer])?;
            self.byte_buffer = 0;
            self.bit_count = 0;
        }
        Ok(())
    }

    /// Finish writing: pad any partial byte with 0 bits until it
    /// flushes, then release the sink without closing it.
    pub fn close(mut self) -> Result<()> {
        while self.bit_count != 0 {
            self.write_bit(false)?;
        }
        Ok(())
    }
}

/// Reads bits MSB-first from a byte source.
///
/// Buffers one byte at a time; `read_bit` returns `Ok(None)` once the
/// underlying stream is exhausted (always at a byte boundary) or after
/// the reader has been closed.
///
/// # Invariants
/// - `bits_remaining` is always <= 8
#[derive(Debug)]
pub struct BitReader<'a, R: Read> {
    /// Borrowed source; stays open after `close()`
    source: &'a mut R,
    /// The byte currently being consumed
    byte_buffer: u8,
    /// Unread bits left in byte_buffer (0-8)
    bits_remaining: u8,
    /// Set by `close()`: the reader is permanently exhausted
    closed: bool,
}

impl<'a, R: Read> BitReader<'a, R> {
    /// Create a BitReader over the given byte source.
    pub fn new(source: &'a mut R) -> Self {
        Self {
            source,
            byte_buffer: 0,
            bits_remaining: 0,
            closed: false,
        }
    }

    /// Read the next bit, or `None` if the stream is exhausted.
    pub fn read_bit(&mut self) -> Result<Option<bool>> {
        if self.closed {
            return Ok(None);
        }
        if self.bits_remaining == 0 && !self.refill()? {
            return Ok(None);
        }
        self.bits_remaining -= 1;
        Ok(Some((self.byte_buffer >> self.bits_remaining) & 1 == 1))
    }

    /// Mark the reader permanently exhausted. The underlying byte
    /// stream is untouched and remains usable by the caller.
    pub fn close(&mut self) {
        self.closed = true;
        self.bits_remaining = 0;
    }

    /// Pull the next byte from the source. Returns false on a clean
    /// end of stream.
    fn refill(&mut self) -> Result<bool> {
        let mut byte = [0u8; 1];
        loop {
            match self.source.read(&mut byte) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.byte_buffer = byte[0];
                    self.bits_remaining = 8;
                    return Ok(true);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
