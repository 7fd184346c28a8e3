//! Symbol-level encoding and decoding over bit streams.
//!
//! The encoder translates bytes to code bits through a CodeTable and
//! terminates the payload with the sentinel's code; the decoder walks
//! the tree one bit per step until it lands on a leaf. A payload is
//! self-terminating: decoding stops the moment the sentinel symbol is
//! produced, and the sentinel is never written to output.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{BitIoError, Result};
use crate::freq::EOF_SYMBOL;
use crate::tree::{CodeTable, Node};
use std::io::{Read, Write};

/// Encodes symbols into a Huffman-coded bit stream.
pub struct Encoder<'a, W: Write> {
    codes: &'a CodeTable,
    output: BitWriter<'a, W>,
}

impl<'a, W: Write> Encoder<'a, W> {
    /// Construct an encoder writing through a fresh BitWriter over `sink`.
    pub fn new(codes: &'a CodeTable, sink: &'a mut W) -> Self {
        Self {
            codes,
            output: BitWriter::new(sink),
        }
    }

    /// Emit the code bits for one symbol.
    pub fn write(&mut self, symbol: u16) -> Result<()> {
        for &bit in self.codes.code(symbol)? {
            self.output.write_bit(bit)?;
        }
        Ok(())
    }

    /// Terminate the payload: emit the sentinel's code, then close the
    /// BitWriter (pads to a byte boundary; the sink stays open).
    pub fn finish(mut self) -> Result<()> {
        self.write(EOF_SYMBOL)?;
        self.output.close()
    }
}

/// Decodes symbols from a Huffman-coded bit stream by tree walk.
pub struct Decoder<'a, R: Read> {
    input: BitReader<'a, R>,
    root: &'a Node,
}

impl<'a, R: Read> Decoder<'a, R> {
    /// Construct a decoder reading through a fresh BitReader over `source`.
    pub fn new(root: &'a Node, source: &'a mut R) -> Self {
        Self {
            input: BitReader::new(source),
            root,
        }
    }

    /// Decode the next symbol: walk from the root, consuming one bit
    /// per internal node (0 = left, 1 = right), until a leaf is
    /// reached. No bits are consumed once the walk is on a leaf.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` if the stream ends mid-walk.
    pub fn read(&mut self) -> Result<u16> {
        let mut current = self.root;
        loop {
            match current {
                Node::Leaf { symbol } => return Ok(*symbol),
                Node::Internal { left, right } => {
                    let bit = self
                        .input
                        .read_bit()?
                        .ok_or(BitIoError::UnexpectedEof)?;
                    current = if bit { right.as_ref() } else { left.as_ref() };
                }
            }
        }
    }

    /// Decode symbols into `out` until the sentinel appears. The
    /// sentinel itself is consumed but never written.
    pub fn read_to_end<W: Write>(&mut self, out: &mut W) -> Result<()> {
        loop {
            let symbol = self.read()?;
            if symbol == EOF_SYMBOL {
                self.input.close();
                return Ok(());
            }
            out.write_all(&[symbol as u8])?;
        }
    }
}

/// Encode every byte of `input` into `sink`, terminated by the
/// sentinel code and padded to a byte boundary.
pub fn encode_stream<R: Read, W: Write>(
    codes: &CodeTable,
    mut input: R,
    sink: &mut W,
) -> Result<()> {
    let mut encoder = Encoder::new(codes, sink);
    let mut buf = [0u8; 8192];
    loop {
        match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                for &byte in &buf[..n] {
                    encoder.write(byte as u16)?;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    encoder.finish()
}
