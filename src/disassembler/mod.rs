//! CIL (Common Intermediate Language) opcode decoding.
//!
//! This module tokenizes the raw byte buffer of a method body into a lazy sequence of opcodes.
//! It stops at opcode granularity: operand bytes are not consumed or interpreted,
//! and no control flow is reconstructed. The decode → yield → caller-decides shape lets a later
//! lowering pass turn the opcode sequence into text without touching the decoder.
//!
//! # Key Types
//! - [`Opcode`] - A decoded opcode token (offset, prefix, code, mnemonic)
//! - [`OpcodeDecoder`] - Lazy iterator over the opcodes of one body
//!
//! # Main Functions
//! - [`decode_opcodes`] - Decode the opcode stream of a body
//! - [`decode_opcode`] - Decode a single opcode
//!
//! # Example
//! ```rust
//! use backscope::disassembler::decode_opcodes;
//!
//! let bytecode = &[0x00, 0x2A]; // nop, ret
//! for opcode in decode_opcodes(bytecode) {
//!     println!("Mnemonic: {}", opcode?);
//! }
//! # Ok::<(), backscope::Error>(())
//! ```

mod decoder;
mod opcode;

pub use decoder::{decode_opcode, decode_opcodes, OpcodeDecoder};
pub use opcode::{Opcode, FE_PREFIX};
