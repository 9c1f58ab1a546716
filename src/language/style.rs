//! Lexical styles and primitive type aliases of the Backlang surface syntax.
//!
//! Both tables are immutable `static` data. [`style_for`] is total over [`StyleCategory`] and
//! [`alias_for`] covers the closed set of [`PrimitiveAlias`] names; any other type keeps its
//! own name.

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{
    metadata::typesystem::TypeRef,
    output::{Color, Style},
};

/// Lexical category of an emitted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum StyleCategory {
    /// Keywords and keyword-like literals (`true`, `false`)
    Keyword,
    /// Type references
    Type,
    /// String and character literals
    String,
    /// Annotations
    Annotation,
}

/// Style of keywords, blue
pub const KEYWORD_STYLE: Style = Style {
    name: "Keyword",
    foreground: Color::rgb(0x00, 0x00, 0xFF),
};

/// Style of type references, light blue
pub const TYPE_STYLE: Style = Style {
    name: "Type",
    foreground: Color::rgb(0xAD, 0xD8, 0xE6),
};

/// Style of string and character literals, pale violet red
pub const STRING_STYLE: Style = Style {
    name: "String",
    foreground: Color::rgb(0xDB, 0x70, 0x93),
};

/// Style of annotations, green
pub const ANNOTATION_STYLE: Style = Style {
    name: "Annotation",
    foreground: Color::rgb(0x00, 0x80, 0x00),
};

/// The display style of a lexical category
#[must_use]
pub fn style_for(category: StyleCategory) -> Style {
    match category {
        StyleCategory::Keyword => KEYWORD_STYLE,
        StyleCategory::Type => TYPE_STYLE,
        StyleCategory::String => STRING_STYLE,
        StyleCategory::Annotation => ANNOTATION_STYLE,
    }
}

/// Platform primitive types with a short Backlang spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum PrimitiveAlias {
    /// `System.Boolean`
    Boolean,
    /// `System.Object`
    Object,
    /// `System.String`
    String,
    /// `System.Char`
    Char,
    /// `System.SByte`
    SByte,
    /// `System.Byte`
    Byte,
    /// `System.Int16`
    Int16,
    /// `System.UInt16`
    UInt16,
    /// `System.Int32`
    Int32,
    /// `System.UInt32`
    UInt32,
    /// `System.Int64`
    Int64,
    /// `System.UInt64`
    UInt64,
    /// `System.Half`
    Half,
    /// `System.Single`
    Single,
    /// `System.Double`
    Double,
}

impl PrimitiveAlias {
    /// The type name as found in metadata
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveAlias::Boolean => "Boolean",
            PrimitiveAlias::Object => "Object",
            PrimitiveAlias::String => "String",
            PrimitiveAlias::Char => "Char",
            PrimitiveAlias::SByte => "SByte",
            PrimitiveAlias::Byte => "Byte",
            PrimitiveAlias::Int16 => "Int16",
            PrimitiveAlias::UInt16 => "UInt16",
            PrimitiveAlias::Int32 => "Int32",
            PrimitiveAlias::UInt32 => "UInt32",
            PrimitiveAlias::Int64 => "Int64",
            PrimitiveAlias::UInt64 => "UInt64",
            PrimitiveAlias::Half => "Half",
            PrimitiveAlias::Single => "Single",
            PrimitiveAlias::Double => "Double",
        }
    }

    /// The Backlang spelling
    #[must_use]
    pub fn alias(&self) -> &'static str {
        match self {
            PrimitiveAlias::Boolean => "bool",
            PrimitiveAlias::Object => "obj",
            PrimitiveAlias::String => "string",
            PrimitiveAlias::Char => "char",
            PrimitiveAlias::SByte => "i8",
            PrimitiveAlias::Byte => "u8",
            PrimitiveAlias::Int16 => "i16",
            PrimitiveAlias::UInt16 => "u16",
            PrimitiveAlias::Int32 => "i32",
            PrimitiveAlias::UInt32 => "u32",
            PrimitiveAlias::Int64 => "i64",
            PrimitiveAlias::UInt64 => "u64",
            PrimitiveAlias::Half => "f16",
            PrimitiveAlias::Single => "f32",
            PrimitiveAlias::Double => "f64",
        }
    }

    /// Look up a primitive by its metadata type name
    #[must_use]
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        PrimitiveAlias::iter().find(|primitive| primitive.type_name() == type_name)
    }
}

/// The Backlang spelling of a primitive type name, `None` for any other type.
///
/// # Examples
///
/// ```rust
/// use backscope::language::style::alias_for;
///
/// assert_eq!(alias_for("Int32"), Some("i32"));
/// assert_eq!(alias_for("Boolean"), Some("bool"));
/// assert_eq!(alias_for("Point"), None);
/// ```
#[must_use]
pub fn alias_for(type_name: &str) -> Option<&'static str> {
    PrimitiveAlias::from_type_name(type_name).map(|primitive| primitive.alias())
}

/// The name a type reference is displayed with: its alias, or its own simple name
#[must_use]
pub fn display_type_name(type_ref: &TypeRef) -> &str {
    alias_for(&type_ref.name).unwrap_or(type_ref.name.as_str())
}
