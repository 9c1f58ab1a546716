//! CIL opcode tokens and the ECMA-335 mnemonic tables.
//!
//! Single-byte opcodes occupy `0x00 – 0xE0`. Two-byte opcodes share the lead byte
//! [`FE_PREFIX`] and use `0x00 – 0x1E` as their second byte. Slots without an assigned
//! instruction hold an empty mnemonic; such opcodes are still valid tokens, they simply
//! report `None` from [`Opcode::mnemonic`].

use std::fmt;

/// Lead byte of every two-byte opcode
pub const FE_PREFIX: u8 = 0xFE;

/// Mnemonics of the single-byte opcodes, indexed by opcode value
#[rustfmt::skip]
static MNEMONICS: [&str; 0xE1] = [
    // 0x00
    "nop", "break", "ldarg.0", "ldarg.1", "ldarg.2", "ldarg.3", "ldloc.0", "ldloc.1",
    "ldloc.2", "ldloc.3", "stloc.0", "stloc.1", "stloc.2", "stloc.3", "ldarg.s", "ldarga.s",
    // 0x10
    "starg.s", "ldloc.s", "ldloca.s", "stloc.s", "ldnull", "ldc.i4.m1", "ldc.i4.0", "ldc.i4.1",
    "ldc.i4.2", "ldc.i4.3", "ldc.i4.4", "ldc.i4.5", "ldc.i4.6", "ldc.i4.7", "ldc.i4.8", "ldc.i4.s",
    // 0x20
    "ldc.i4", "ldc.i8", "ldc.r4", "ldc.r8", "", "dup", "pop", "jmp",
    "call", "calli", "ret", "br.s", "brfalse.s", "brtrue.s", "beq.s", "bge.s",
    // 0x30
    "bgt.s", "ble.s", "blt.s", "bne.un.s", "bge.un.s", "bgt.un.s", "ble.un.s", "blt.un.s",
    "br", "brfalse", "brtrue", "beq", "bge", "bgt", "ble", "blt",
    // 0x40
    "bne.un", "bge.un", "bgt.un", "ble.un", "blt.un", "switch", "ldind.i1", "ldind.u1",
    "ldind.i2", "ldind.u2", "ldind.i4", "ldind.u4", "ldind.i8", "ldind.i", "ldind.r4", "ldind.r8",
    // 0x50
    "ldind.ref", "stind.ref", "stind.i1", "stind.i2", "stind.i4", "stind.i8", "stind.r4", "stind.r8",
    "add", "sub", "mul", "div", "div.un", "rem", "rem.un", "and",
    // 0x60
    "or", "xor", "shl", "shr", "shr.un", "neg", "not", "conv.i1",
    "conv.i2", "conv.i4", "conv.i8", "conv.r4", "conv.r8", "conv.u4", "conv.u8", "callvirt",
    // 0x70
    "cpobj", "ldobj", "ldstr", "newobj", "castclass", "isinst", "conv.r.un", "",
    "", "unbox", "throw", "ldfld", "ldflda", "stfld", "ldsfld", "ldsflda",
    // 0x80
    "stsfld", "stobj", "conv.ovf.i1.un", "conv.ovf.i2.un", "conv.ovf.i4.un", "conv.ovf.i8.un",
    "conv.ovf.u1.un", "conv.ovf.u2.un", "conv.ovf.u4.un", "conv.ovf.u8.un", "conv.ovf.i.un",
    "conv.ovf.u.un", "box", "newarr", "ldlen", "ldelema",
    // 0x90
    "ldelem.i1", "ldelem.u1", "ldelem.i2", "ldelem.u2", "ldelem.i4", "ldelem.u4", "ldelem.i8", "ldelem.i",
    "ldelem.r4", "ldelem.r8", "ldelem.ref", "stelem.i", "stelem.i1", "stelem.i2", "stelem.i4", "stelem.i8",
    // 0xA0
    "stelem.r4", "stelem.r8", "stelem.ref", "ldelem", "stelem", "unbox.any", "", "",
    "", "", "", "", "", "", "", "",
    // 0xB0
    "", "", "", "conv.ovf.i1", "conv.ovf.u1", "conv.ovf.i2", "conv.ovf.u2", "conv.ovf.i4",
    "conv.ovf.u4", "conv.ovf.i8", "conv.ovf.u8", "", "", "", "", "",
    // 0xC0
    "", "", "refanyval", "ckfinite", "", "", "mkrefany", "",
    "", "", "", "", "", "", "", "",
    // 0xD0
    "ldtoken", "conv.u2", "conv.u1", "conv.i", "conv.ovf.i", "conv.ovf.u", "add.ovf", "add.ovf.un",
    "mul.ovf", "mul.ovf.un", "sub.ovf", "sub.ovf.un", "endfinally", "leave", "leave.s", "stind.i",
    // 0xE0
    "conv.u",
];

/// Mnemonics of the `0xFE`-prefixed opcodes, indexed by their second byte
#[rustfmt::skip]
static MNEMONICS_FE: [&str; 0x1F] = [
    // 0xFE 0x00
    "arglist", "ceq", "cgt", "cgt.un", "clt", "clt.un", "ldftn", "ldvirtftn",
    "", "ldarg", "ldarga", "starg", "ldloc", "ldloca", "stloc", "localloc",
    // 0xFE 0x10
    "", "endfilter", "unaligned.", "volatile.", "tail.", "initobj", "constrained.", "cpblk",
    "initblk", "no.", "rethrow", "", "sizeof", "refanytype", "readonly.",
];

/// A single decoded opcode token.
///
/// An `Opcode` identifies which instruction starts at [`Opcode::offset`], without its operand
/// bytes. It is the unit the decoder yields and the input of any later lowering into text.
///
/// # Examples
///
/// ```rust
/// use backscope::disassembler::Opcode;
///
/// let ceq = Opcode::new(4, 0xFE, 0x01);
/// assert!(ceq.is_extended());
/// assert_eq!(ceq.size(), 2);
/// assert_eq!(ceq.value(), 0xFE01);
/// assert_eq!(ceq.mnemonic(), Some("ceq"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    /// Offset of the opcode within the method body
    pub offset: usize,
    /// Lead byte for two-byte opcodes ([`FE_PREFIX`]), `0` for single-byte opcodes
    pub prefix: u8,
    /// The opcode byte (second byte for two-byte opcodes)
    pub code: u8,
}

impl Opcode {
    /// Create a new opcode token.
    ///
    /// ## Arguments
    /// * `offset` - Offset of the first opcode byte in the body
    /// * `prefix` - [`FE_PREFIX`] for two-byte opcodes, `0` otherwise
    /// * `code`   - The opcode byte
    #[must_use]
    pub fn new(offset: usize, prefix: u8, code: u8) -> Self {
        Opcode {
            offset,
            prefix,
            code,
        }
    }

    /// Returns `true` for opcodes encoded with the [`FE_PREFIX`] lead byte
    #[must_use]
    pub fn is_extended(&self) -> bool {
        self.prefix == FE_PREFIX
    }

    /// Number of bytes the opcode occupies in the body (1 or 2)
    #[must_use]
    pub fn size(&self) -> usize {
        if self.is_extended() {
            2
        } else {
            1
        }
    }

    /// The combined opcode value, e.g. `0x2A` for `ret` or `0xFE01` for `ceq`
    #[must_use]
    pub fn value(&self) -> u16 {
        (u16::from(self.prefix) << 8) | u16::from(self.code)
    }

    /// The ECMA-335 mnemonic of this opcode, `None` for unassigned opcode values
    #[must_use]
    pub fn mnemonic(&self) -> Option<&'static str> {
        let table: &[&'static str] = if self.is_extended() {
            &MNEMONICS_FE
        } else {
            &MNEMONICS
        };

        match table.get(self.code as usize) {
            Some(mnemonic) if !mnemonic.is_empty() => Some(*mnemonic),
            _ => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(mnemonic) => write!(f, "{mnemonic}"),
            None if self.is_extended() => write!(f, "<unknown FE {:02X}>", self.code),
            None => write!(f, "<unknown {:02X}>", self.code),
        }
    }
}
