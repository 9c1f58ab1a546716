//! Type references, declaration kinds and accessibility.
//!
//! The projection only needs a thin slice of the .NET type system: the name of a referenced
//! type (to look up a primitive alias), its full name (to recognise the synthesized base types
//! and the `void` sentinel), the kind of a declaration and its accessibility level.

use std::fmt;

/// Full name of the universal object base type
pub const SYSTEM_OBJECT: &str = "System.Object";
/// Full name of the base type of all enumerations
pub const SYSTEM_ENUM: &str = "System.Enum";
/// Full name of the base type of all value types
pub const SYSTEM_VALUE_TYPE: &str = "System.ValueType";
/// Full name of the base type of all delegates
pub const SYSTEM_MULTICAST_DELEGATE: &str = "System.MulticastDelegate";
/// Full name of the 'no value' return type
pub const SYSTEM_VOID: &str = "System.Void";

/// Element type codes of ECMA-335 II.23.1.16 that can appear in constant blobs
#[allow(non_snake_case)]
#[allow(missing_docs)]
pub mod ELEMENT_TYPE {
    pub const VOID: u8 = 0x01;
    pub const BOOLEAN: u8 = 0x02;
    pub const CHAR: u8 = 0x03;
    pub const I1: u8 = 0x04;
    pub const U1: u8 = 0x05;
    pub const I2: u8 = 0x06;
    pub const U2: u8 = 0x07;
    pub const I4: u8 = 0x08;
    pub const U4: u8 = 0x09;
    pub const I8: u8 = 0x0a;
    pub const U8: u8 = 0x0b;
    pub const R4: u8 = 0x0c;
    pub const R8: u8 = 0x0d;
    pub const STRING: u8 = 0x0e;
    // Null reference constant
    pub const CLASS: u8 = 0x12;
}

/// Bitmask for the visibility bits of `TypeAttributes`
pub const TYPE_VISIBILITY_MASK: u32 = 0x0007;
/// Bitmask for the access bits of `MethodAttributes` and `FieldAttributes`
pub const MEMBER_ACCESS_MASK: u32 = 0x0007;
/// `TypeAttributes` flag marking an interface
pub const TYPE_INTERFACE: u32 = 0x0020;

/// A reference to a type, as used by fields, parameters, return values and base type lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// The simple name, e.g. `Int32`
    pub name: String,
    /// The namespace-qualified name, e.g. `System.Int32`
    pub full_name: String,
}

impl TypeRef {
    /// Create a reference from a namespace and a simple name.
    ///
    /// An empty namespace yields a full name equal to the simple name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backscope::metadata::typesystem::TypeRef;
    ///
    /// let int = TypeRef::new("System", "Int32");
    /// assert_eq!(int.full_name, "System.Int32");
    ///
    /// let global = TypeRef::new("", "Program");
    /// assert_eq!(global.full_name, "Program");
    /// ```
    #[must_use]
    pub fn new(namespace: &str, name: &str) -> Self {
        TypeRef {
            name: name.to_string(),
            full_name: qualify(namespace, name),
        }
    }

    /// Create a reference to a type in the `System` namespace
    #[must_use]
    pub fn system(name: &str) -> Self {
        Self::new("System", name)
    }

    /// Create a reference from a namespace-qualified name, splitting at the last `.`
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Self {
        match full_name.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", full_name),
        }
    }

    /// The 'no value' return type sentinel, `System.Void`
    #[must_use]
    pub fn void() -> Self {
        Self::system("Void")
    }

    /// Returns `true` if this is the 'no value' sentinel
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.full_name == SYSTEM_VOID
    }

    /// Returns `true` for the base types every enum, value type or class inherits implicitly
    #[must_use]
    pub fn is_synthesized_base(&self) -> bool {
        matches!(
            self.full_name.as_str(),
            SYSTEM_OBJECT | SYSTEM_ENUM | SYSTEM_VALUE_TYPE
        )
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

/// Joins a namespace and a name into a full name
pub(crate) fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// The kind of a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// A reference type
    #[default]
    Class,
    /// A value type
    Struct,
    /// An interface
    Interface,
    /// An enumeration
    Enum,
    /// A delegate type
    Delegate,
}

impl TypeKind {
    /// Classify a type from its raw `TypeAttributes` and the full name of its direct base type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backscope::metadata::typesystem::TypeKind;
    ///
    /// assert_eq!(TypeKind::classify(0x0020, None), TypeKind::Interface);
    /// assert_eq!(TypeKind::classify(0x0101, Some("System.ValueType")), TypeKind::Struct);
    /// assert_eq!(TypeKind::classify(0x0001, Some("System.Object")), TypeKind::Class);
    /// ```
    #[must_use]
    pub fn classify(flags: u32, base: Option<&str>) -> Self {
        if flags & TYPE_INTERFACE != 0 {
            return TypeKind::Interface;
        }

        match base {
            Some(SYSTEM_ENUM) => TypeKind::Enum,
            Some(SYSTEM_VALUE_TYPE) => TypeKind::Struct,
            Some(SYSTEM_MULTICAST_DELEGATE) => TypeKind::Delegate,
            _ => TypeKind::Class,
        }
    }

    /// The declaration keyword used for this kind; delegates fall back to `class`
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Class | TypeKind::Delegate => "class",
        }
    }
}

/// Accessibility level of a type or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accessibility {
    /// No accessibility keyword applies (e.g. compiler controlled members)
    #[default]
    None,
    /// Accessible by anyone
    Public,
    /// Accessible only inside the declaring type
    Private,
    /// Accessible inside the declaring assembly
    Internal,
    /// Accessible by the declaring type and its sub-types
    Protected,
}

impl Accessibility {
    /// The keyword for this level, `None` if no keyword applies
    #[must_use]
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Accessibility::None => None,
            Accessibility::Public => Some("public"),
            Accessibility::Private => Some("private"),
            Accessibility::Internal => Some("internal"),
            Accessibility::Protected => Some("protected"),
        }
    }

    /// Extract the accessibility from raw `MethodAttributes`
    #[must_use]
    pub fn from_method_flags(flags: u32) -> Self {
        Self::from_member_access(flags & MEMBER_ACCESS_MASK)
    }

    /// Extract the accessibility from raw `FieldAttributes`
    #[must_use]
    pub fn from_field_flags(flags: u32) -> Self {
        Self::from_member_access(flags & MEMBER_ACCESS_MASK)
    }

    /// Extract the accessibility from raw `TypeAttributes`
    #[must_use]
    pub fn from_type_flags(flags: u32) -> Self {
        match flags & TYPE_VISIBILITY_MASK {
            // NotPublic, NestedAssembly, NestedFamANDAssem
            0 | 5 | 6 => Accessibility::Internal,
            // Public, NestedPublic
            1 | 2 => Accessibility::Public,
            3 => Accessibility::Private,
            // NestedFamily, NestedFamORAssem
            _ => Accessibility::Protected,
        }
    }

    fn from_member_access(access: u32) -> Self {
        match access {
            1 => Accessibility::Private,
            // FamANDAssem, Assembly
            2 | 3 => Accessibility::Internal,
            // Family, FamORAssem
            4 | 5 => Accessibility::Protected,
            6 => Accessibility::Public,
            _ => Accessibility::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_names() {
        let string = TypeRef::system("String");
        assert_eq!(string.name, "String");
        assert_eq!(string.full_name, "System.String");

        let nested = TypeRef::from_full_name("Geometry.Shapes.Point");
        assert_eq!(nested.name, "Point");
        assert_eq!(nested.full_name, "Geometry.Shapes.Point");

        let global = TypeRef::from_full_name("Program");
        assert_eq!(global.name, "Program");
        assert_eq!(global.full_name, "Program");
    }

    #[test]
    fn void_sentinel() {
        assert!(TypeRef::void().is_void());
        assert!(!TypeRef::system("Int32").is_void());
        // Only the fully qualified name counts
        assert!(!TypeRef::new("Other", "Void").is_void());
    }

    #[test]
    fn synthesized_bases() {
        assert!(TypeRef::system("Object").is_synthesized_base());
        assert!(TypeRef::system("Enum").is_synthesized_base());
        assert!(TypeRef::system("ValueType").is_synthesized_base());
        assert!(!TypeRef::system("IDisposable").is_synthesized_base());
        assert!(!TypeRef::new("Geometry", "Object").is_synthesized_base());
    }

    #[test]
    fn kind_keywords() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::Struct.keyword(), "struct");
        assert_eq!(TypeKind::Interface.keyword(), "interface");
        assert_eq!(TypeKind::Enum.keyword(), "enum");
        assert_eq!(TypeKind::Delegate.keyword(), "class");
    }

    #[test]
    fn kind_classification() {
        assert_eq!(TypeKind::classify(0x00A1, None), TypeKind::Interface);
        assert_eq!(TypeKind::classify(0x0101, Some(SYSTEM_ENUM)), TypeKind::Enum);
        assert_eq!(
            TypeKind::classify(0x0101, Some(SYSTEM_MULTICAST_DELEGATE)),
            TypeKind::Delegate
        );
        assert_eq!(TypeKind::classify(0x0001, None), TypeKind::Class);
    }

    #[test]
    fn accessibility_from_flags() {
        assert_eq!(Accessibility::from_method_flags(0x0000), Accessibility::None);
        assert_eq!(Accessibility::from_method_flags(0x0001), Accessibility::Private);
        assert_eq!(Accessibility::from_method_flags(0x0003), Accessibility::Internal);
        assert_eq!(Accessibility::from_method_flags(0x0004), Accessibility::Protected);
        // Access bits are isolated from the remaining attribute bits
        assert_eq!(Accessibility::from_method_flags(0x0096), Accessibility::Public);
        assert_eq!(Accessibility::from_field_flags(0x0016), Accessibility::Public);

        assert_eq!(Accessibility::from_type_flags(0x0000), Accessibility::Internal);
        assert_eq!(Accessibility::from_type_flags(0x0101), Accessibility::Public);
        assert_eq!(Accessibility::from_type_flags(0x0003), Accessibility::Private);
        assert_eq!(Accessibility::from_type_flags(0x0004), Accessibility::Protected);
    }

    #[test]
    fn accessibility_keywords() {
        assert_eq!(Accessibility::None.keyword(), None);
        assert_eq!(Accessibility::Public.keyword(), Some("public"));
        assert_eq!(Accessibility::Private.keyword(), Some("private"));
        assert_eq!(Accessibility::Internal.keyword(), Some("internal"));
        assert_eq!(Accessibility::Protected.keyword(), Some("protected"));
    }
}
