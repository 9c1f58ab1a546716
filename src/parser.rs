//! Low-level byte stream parser for CIL and metadata decoding.
//!
//! This module provides the [`crate::parser::Parser`] type, a cursor-based binary data parser
//! used by the opcode decoder, the constant blob reader and the method header reader. Every read
//! is bounds-checked, so malformed or truncated input surfaces as an error instead of a panic.
//!
//! # Usage Examples
//!
//! ```rust
//! use backscope::Parser;
//!
//! let data = [0x01, 0x02, 0x03, 0x04];
//! let mut parser = Parser::new(&data);
//!
//! let value = parser.read_le::<u16>()?;
//! assert_eq!(value, 0x0201);
//! assert_eq!(parser.remaining(), 2);
//! # Ok::<(), backscope::Error>(())
//! ```

use crate::Result;

/// Primitive values that can be read from a little-endian byte stream.
pub trait ReadLe: Sized {
    /// Number of bytes this type occupies in the stream
    const SIZE: usize;

    /// Build the value from exactly [`ReadLe::SIZE`] little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_read_le {
    ($($ty:ty),*) => {
        $(
            impl ReadLe for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buffer = [0u8; std::mem::size_of::<$ty>()];
                    buffer.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buffer)
                }
            }
        )*
    };
}

impl_read_le!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// A generic binary data parser for reading method bodies and metadata blobs.
///
/// `Parser` maintains an internal position cursor over a borrowed byte slice and provides
/// bounds checking to prevent buffer overruns when reading malformed or truncated data.
///
/// # Examples
///
/// ```rust
/// use backscope::Parser;
///
/// let data = [0xFE, 0x01, 0x2A];
/// let mut parser = Parser::new(&data);
///
/// assert_eq!(parser.peek_byte()?, 0xFE);
/// parser.advance_by(2)?;
/// assert_eq!(parser.read_le::<u8>()?, 0x2A);
/// assert!(!parser.has_more_data());
/// # Ok::<(), backscope::Error>(())
/// ```
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes between the cursor and the end of the buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Move the current position to the specified index.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is beyond the data length.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos >= self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        let end = self.calc_end_position(step)?;
        self.position = end;
        Ok(())
    }

    /// Peek at the next byte without advancing the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is at or beyond the data length.
    pub fn peek_byte(&self) -> Result<u8> {
        match self.data.get(self.position) {
            Some(byte) => Ok(*byte),
            None => Err(out_of_bounds_error!()),
        }
    }

    /// Read a type `T` from the current position in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: ReadLe>(&mut self) -> Result<T> {
        let bytes = self.read_bytes(T::SIZE)?;
        Ok(T::from_le_slice(bytes))
    }

    /// Reads a slice of bytes of the specified length from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading `length` bytes would exceed the data.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let end = self.calc_end_position(length)?;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Calculates an end position safely with overflow checking.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the calculation would overflow
    /// or if the resulting position exceeds the data length.
    pub fn calc_end_position(&self, length: usize) -> Result<usize> {
        let end = self
            .position
            .checked_add(length)
            .ok_or(out_of_bounds_error!())?;

        if end > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        Ok(end)
    }

    /// Read a UTF-16LE string filling the rest of the buffer.
    ///
    /// This is the encoding of string constants in the metadata Blob heap.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for an odd byte count or invalid UTF-16 data.
    pub fn read_string_utf16_to_end(&mut self) -> Result<String> {
        let length = self.remaining();
        if length % 2 != 0 {
            return Err(malformed_error!("Invalid UTF-16 length - {}", length));
        }

        let mut utf16_chars: Vec<u16> = Vec::with_capacity(length / 2);
        while self.has_more_data() {
            utf16_chars.push(self.read_le::<u16>()?);
        }

        String::from_utf16(&utf16_chars)
            .map_err(|_| malformed_error!("Invalid UTF-16 str - {} - {:?}", length, utf16_chars))
    }
}
