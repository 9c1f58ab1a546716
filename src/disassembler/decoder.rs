//! CIL opcode stream decoding.
//!
//! The decoder tokenizes a method body into [`Opcode`]s. It reads exactly one opcode per step
//! (one byte, or the `0xFE` lead byte plus a second byte) and leaves operand bytes untouched,
//! so every byte of the body is treated as a potential opcode. Interpreting operands is the
//! job of a later lowering pass over the yielded tokens.
//!
//! # Example: Walking a Body
//!
//! ```rust
//! use backscope::disassembler::decode_opcodes;
//!
//! let body = [0x00, 0xFE, 0x01, 0x2A]; // nop, ceq, ret
//! let mnemonics = decode_opcodes(&body)
//!     .map(|opcode| opcode.map(|op| op.mnemonic()))
//!     .collect::<backscope::Result<Vec<_>>>()?;
//!
//! assert_eq!(mnemonics, [Some("nop"), Some("ceq"), Some("ret")]);
//! # Ok::<(), backscope::Error>(())
//! ```

use std::iter::FusedIterator;

use crate::{
    disassembler::{Opcode, FE_PREFIX},
    parser::Parser,
    Error, Result,
};

/// Lazy, finite opcode iterator over one method body.
///
/// Created by [`decode_opcodes`]. The iterator keeps a single cursor that starts at offset `0`
/// and only moves forward. It ends once the cursor reaches the end of the buffer, or right after
/// yielding a [`Error::MalformedBody`]. Re-walking a body requires a fresh decoder.
pub struct OpcodeDecoder<'a> {
    parser: Parser<'a>,
    failed: bool,
}

impl<'a> OpcodeDecoder<'a> {
    /// Create a decoder positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        OpcodeDecoder {
            parser: Parser::new(data),
            failed: false,
        }
    }

    /// Number of bytes consumed so far.
    ///
    /// After the iterator returned `None` without an error, this equals the body length.
    #[must_use]
    pub fn position(&self) -> usize {
        self.parser.pos()
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.parser.remaining()
    }
}

impl Iterator for OpcodeDecoder<'_> {
    type Item = Result<Opcode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.parser.has_more_data() {
            return None;
        }

        let result = decode_opcode(&mut self.parser);
        if result.is_err() {
            self.failed = true;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }

        let remaining = self.parser.remaining();
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for OpcodeDecoder<'_> {}

/// Decodes the opcode stream of a method body.
///
/// Returns a lazy iterator; nothing is read until it is polled.
///
/// # Arguments
///
/// * `data` - The raw CIL code bytes of one method body (without the method header)
///
/// # Examples
///
/// ```rust
/// use backscope::disassembler::decode_opcodes;
///
/// // ldc.i4.s 5 - the operand byte is tokenized as an opcode of its own
/// let body = [0x1F, 0x05];
/// let opcodes: Vec<_> = decode_opcodes(&body).collect::<Result<_, _>>()?;
///
/// assert_eq!(opcodes.len(), 2);
/// assert_eq!(opcodes[1].mnemonic(), Some("ldarg.3"));
/// # Ok::<(), backscope::Error>(())
/// ```
#[must_use]
pub fn decode_opcodes(data: &[u8]) -> OpcodeDecoder<'_> {
    OpcodeDecoder::new(data)
}

/// Decodes a single opcode from the current parser position.
///
/// Advances the parser past the opcode bytes only. Opcode values without an assigned
/// instruction are returned like any other opcode; see [`Opcode::mnemonic`].
///
/// # Errors
///
/// Returns [`Error::MalformedBody`] if the parser has no byte left, or if a `0xFE` lead byte is
/// not followed by a second byte. The parser position is left unchanged in that case.
///
/// # Examples
///
/// ```rust
/// use backscope::{disassembler::decode_opcode, Parser};
///
/// let mut parser = Parser::new(&[0xFE, 0x09, 0x01, 0x00]); // ldarg 1
/// let opcode = decode_opcode(&mut parser)?;
///
/// assert_eq!(opcode.mnemonic(), Some("ldarg"));
/// assert_eq!(parser.pos(), 2);
/// # Ok::<(), backscope::Error>(())
/// ```
pub fn decode_opcode(parser: &mut Parser) -> Result<Opcode> {
    let offset = parser.pos();

    let Ok(first_byte) = parser.peek_byte() else {
        return Err(Error::MalformedBody { offset });
    };

    if first_byte == FE_PREFIX {
        let bytes = parser
            .read_bytes(2)
            .map_err(|_| Error::MalformedBody { offset })?;
        return Ok(Opcode::new(offset, FE_PREFIX, bytes[1]));
    }

    parser
        .advance_by(1)
        .map_err(|_| Error::MalformedBody { offset })?;
    Ok(Opcode::new(offset, 0, first_byte))
}
