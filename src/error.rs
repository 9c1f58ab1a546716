use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds {
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Formatting a declaration never fails; errors only surface from the components that read raw
/// bytes: the [`crate::Parser`], the opcode decoder in [`crate::disassembler`], and the model
/// readers for constant blobs and method headers.
///
/// # Error Categories
///
/// - [`Error::MalformedBody`] - A method body ended in the middle of an opcode
/// - [`Error::Malformed`] - Corrupted or invalid constant blob or method header
/// - [`Error::OutOfBounds`] - Attempted to read beyond the end of a buffer
///
/// # Examples
///
/// ```rust
/// use backscope::{disassembler::decode_opcodes, Error};
///
/// // 0xFE announces a two-byte opcode, but the buffer ends right after it
/// let body = [0x00, 0xFE];
/// let results: Vec<_> = decode_opcodes(&body).collect();
///
/// match results.last() {
///     Some(Err(Error::MalformedBody { offset })) => assert_eq!(*offset, 1),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A method body ended before a complete opcode could be read.
    ///
    /// Raised by the opcode decoder when the `0xFE` lead byte of a two-byte opcode is the last
    /// byte of the buffer. The method formatter contains this error: it stops decoding and still
    /// closes the body block.
    #[error("Method body ends mid-opcode at offset {offset}")]
    MalformedBody {
        /// Offset of the incomplete opcode within the body
        offset: usize,
    },

    /// The data is damaged and could not be parsed.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing.
    ///
    /// A safety check that prevents buffer overruns on truncated blobs and bodies.
    #[error("Out of Bound read would have occurred - {file}:{line}")]
    OutOfBounds {
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}
