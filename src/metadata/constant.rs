//! Compile-time constant values of fields.
//!
//! [`ConstantValue`] is the value a field declaration may carry. Hosts either build one directly
//! (the `From` conversions cover the usual Rust literals) or decode the raw blob of a Constant
//! table row with [`ConstantValue::from_blob`].

use crate::{metadata::typesystem::ELEMENT_TYPE, parser::Parser, Result};

/// A constant value attached to a field
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// A string constant
    String(String),
    /// A single character
    Char(char),
    /// A boolean
    Boolean(bool),
    /// Any signed integer width
    Integer(i64),
    /// Any unsigned integer width
    Unsigned(u64),
    /// A single precision float, kept narrow so it prints its shortest `f32` form
    Single(f32),
    /// A double precision float
    Float(f64),
    /// Anything else, already spelled out (e.g. a `null` reference)
    Other(String),
}

impl ConstantValue {
    /// Decode a constant from its ECMA-335 element type and blob bytes.
    ///
    /// Integers are widened to [`ConstantValue::Integer`] / [`ConstantValue::Unsigned`]. `R4`
    /// stays a [`ConstantValue::Single`] and `R8` becomes a [`ConstantValue::Float`]. A `CLASS`
    /// constant is always the null reference.
    ///
    /// # Arguments
    /// * `element_type` - The `ELEMENT_TYPE` code of the Constant table row
    /// * `data` - The blob heap contents of the row
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the blob is shorter than the element type needs,
    /// and [`crate::Error::Malformed`] for unsupported element types, lone surrogate characters
    /// or invalid string data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backscope::metadata::{constant::ConstantValue, typesystem::ELEMENT_TYPE};
    ///
    /// let value = ConstantValue::from_blob(ELEMENT_TYPE::I4, &[0xFF, 0xFF, 0xFF, 0xFF])?;
    /// assert_eq!(value, ConstantValue::Integer(-1));
    /// # Ok::<(), backscope::Error>(())
    /// ```
    pub fn from_blob(element_type: u8, data: &[u8]) -> Result<Self> {
        let mut parser = Parser::new(data);

        match element_type {
            ELEMENT_TYPE::BOOLEAN => Ok(ConstantValue::Boolean(parser.read_le::<u8>()? != 0)),
            ELEMENT_TYPE::CHAR => {
                let unit = parser.read_le::<u16>()?;
                match char::decode_utf16([unit]).next() {
                    Some(Ok(character)) => Ok(ConstantValue::Char(character)),
                    _ => Err(malformed_error!("Invalid UTF-16 char - 0x{:04X}", unit)),
                }
            }
            ELEMENT_TYPE::I1 => Ok(ConstantValue::Integer(i64::from(parser.read_le::<i8>()?))),
            ELEMENT_TYPE::U1 => Ok(ConstantValue::Unsigned(u64::from(parser.read_le::<u8>()?))),
            ELEMENT_TYPE::I2 => Ok(ConstantValue::Integer(i64::from(parser.read_le::<i16>()?))),
            ELEMENT_TYPE::U2 => Ok(ConstantValue::Unsigned(u64::from(parser.read_le::<u16>()?))),
            ELEMENT_TYPE::I4 => Ok(ConstantValue::Integer(i64::from(parser.read_le::<i32>()?))),
            ELEMENT_TYPE::U4 => Ok(ConstantValue::Unsigned(u64::from(parser.read_le::<u32>()?))),
            ELEMENT_TYPE::I8 => Ok(ConstantValue::Integer(parser.read_le::<i64>()?)),
            ELEMENT_TYPE::U8 => Ok(ConstantValue::Unsigned(parser.read_le::<u64>()?)),
            ELEMENT_TYPE::R4 => Ok(ConstantValue::Single(parser.read_le::<f32>()?)),
            ELEMENT_TYPE::R8 => Ok(ConstantValue::Float(parser.read_le::<f64>()?)),
            ELEMENT_TYPE::STRING => Ok(ConstantValue::String(parser.read_string_utf16_to_end()?)),
            ELEMENT_TYPE::CLASS => Ok(ConstantValue::Other("null".to_string())),
            _ => Err(malformed_error!(
                "Unsupported constant element type - 0x{:02X}",
                element_type
            )),
        }
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::String(value)
    }
}

impl From<char> for ConstantValue {
    fn from(value: char) -> Self {
        ConstantValue::Char(value)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Boolean(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Integer(i64::from(value))
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Integer(value)
    }
}

impl From<u32> for ConstantValue {
    fn from(value: u32) -> Self {
        ConstantValue::Unsigned(u64::from(value))
    }
}

impl From<u64> for ConstantValue {
    fn from(value: u64) -> Self {
        ConstantValue::Unsigned(value)
    }
}

impl From<f32> for ConstantValue {
    fn from(value: f32) -> Self {
        ConstantValue::Single(value)
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Float(value)
    }
}
