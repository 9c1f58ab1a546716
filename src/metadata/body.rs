//! Raw CIL method bodies and the ECMA-335 method header.
//!
//! A [`MethodBody`] carries the code bytes of one method, which is what the opcode decoder walks.
//! Bodies either come straight from a host that already stripped the header ([`MethodBody::new`])
//! or are sliced out of a header-carrying blob with [`MethodBody::parse`].
//!
//! # References
//! - ECMA-335 6th Edition, Partition II, Section 25.4 - Method Header Format

use bitflags::bitflags;

use crate::{parser::Parser, Result};

/// Default evaluation stack depth of methods with a tiny header
pub const TINY_MAX_STACK: u16 = 8;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Flags of a method header
    pub struct MethodBodyFlags: u16 {
        /// Method header is tiny
        const TINY_FORMAT = 0x2;
        /// Method header is fat
        const FAT_FORMAT = 0x3;
        /// Extra data sections follow the code
        const MORE_SECTS = 0x8;
        /// Call the default constructor on all local variables
        const INIT_LOCALS = 0x10;
    }
}

/// The CIL code of one method, with the facts of its header when it had one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodBody {
    /// The raw CIL code bytes, without the header
    pub code: Vec<u8>,
    /// Maximum number of items on the evaluation stack
    pub max_stack: u16,
    /// Flag, indicating the type of the method header
    pub is_fat: bool,
    /// Flag, indicating to call default constructor on all local variables
    pub init_locals: bool,
    /// Token of the local variable signature, `0` if there are no locals
    pub local_var_sig_token: u32,
}

impl MethodBody {
    /// Create a body from code bytes that carry no header.
    #[must_use]
    pub fn new(code: impl Into<Vec<u8>>) -> Self {
        MethodBody {
            code: code.into(),
            max_stack: TINY_MAX_STACK,
            ..Default::default()
        }
    }

    /// Parse a method header and slice out the code bytes that follow it.
    ///
    /// Extra data sections after the code are not read.
    ///
    /// # Arguments
    /// * `data` - The method blob, starting with the header byte
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for empty data or a header that is neither tiny
    /// nor fat, and [`crate::Error::OutOfBounds`] if the header or code exceed the data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backscope::metadata::body::MethodBody;
    ///
    /// // Tiny header announcing 2 code bytes: nop, ret
    /// let body = MethodBody::parse(&[0x0A, 0x00, 0x2A])?;
    /// assert_eq!(body.code, [0x00, 0x2A]);
    /// assert!(!body.is_fat);
    /// # Ok::<(), backscope::Error>(())
    /// ```
    pub fn parse(data: &[u8]) -> Result<MethodBody> {
        if data.is_empty() {
            return Err(malformed_error!("Provided data for body parsing is empty"));
        }

        let mut parser = Parser::new(data);
        let first_byte = parser.peek_byte()?;

        match MethodBodyFlags::from_bits_truncate(u16::from(first_byte & 0b_0000_0011_u8)) {
            MethodBodyFlags::TINY_FORMAT => {
                parser.advance_by(1)?;
                let size_code = (first_byte >> 2) as usize;
                let code = parser.read_bytes(size_code)?;

                Ok(MethodBody {
                    code: code.to_vec(),
                    max_stack: TINY_MAX_STACK,
                    is_fat: false,
                    init_locals: false,
                    local_var_sig_token: 0,
                })
            }
            MethodBodyFlags::FAT_FORMAT => {
                let first_duo = parser.read_le::<u16>()?;
                let max_stack = parser.read_le::<u16>()?;
                let size_code = parser.read_le::<u32>()? as usize;
                let local_var_sig_token = parser.read_le::<u32>()?;

                let size_header = usize::from(first_duo >> 12) * 4;
                if size_header < 12 {
                    return Err(malformed_error!(
                        "Fat method header too small - {} bytes",
                        size_header
                    ));
                }

                parser.advance_by(size_header - parser.pos())?;
                let code = parser.read_bytes(size_code)?;
                let flags_header =
                    MethodBodyFlags::from_bits_truncate(first_duo & 0b_0000_1111_1111_1111_u16);

                Ok(MethodBody {
                    code: code.to_vec(),
                    max_stack,
                    is_fat: true,
                    init_locals: flags_header.contains(MethodBodyFlags::INIT_LOCALS),
                    local_var_sig_token,
                })
            }
            _ => Err(malformed_error!(
                "MethodHeader is neither FAT nor TINY - {}",
                first_byte
            )),
        }
    }

    /// Length of the code in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.code.len()
    }
}
