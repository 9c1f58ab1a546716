//! Declarations of types and their members.
//!
//! These are the read-only inputs of the projection. They are plain owned data, filled by an
//! upstream metadata reader or by the builders in [`crate::metadata::builders`], and borrowed
//! by the formatters.

use bitflags::bitflags;

use crate::metadata::{
    body::MethodBody,
    constant::ConstantValue,
    typesystem::{qualify, Accessibility, TypeKind, TypeRef},
};

/// `TypeAttributes` flag of abstract types
pub const TYPE_ABSTRACT: u32 = 0x0080;
/// `TypeAttributes` flag of sealed types
pub const TYPE_SEALED: u32 = 0x0100;

/// `MethodAttributes` flag of static methods
pub const METHOD_STATIC: u32 = 0x0010;
/// `MethodAttributes` flag of virtual methods
pub const METHOD_VIRTUAL: u32 = 0x0040;
/// `MethodAttributes` flag of methods that always get a new vtable slot
pub const METHOD_NEW_SLOT: u32 = 0x0100;
/// `MethodAttributes` flag of abstract methods
pub const METHOD_ABSTRACT: u32 = 0x0400;
/// `MethodAttributes` flag of methods with a special name
pub const METHOD_SPECIAL_NAME: u32 = 0x0800;

/// Name prefix of operator overload methods
pub const OPERATOR_PREFIX: &str = "op_";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Modifiers of a type declaration
    pub struct TypeModifiers: u8 {
        /// The type cannot be derived from
        const SEALED = 0x01;
        /// The type only has static members
        const STATIC = 0x02;
        /// The type cannot be instantiated
        const ABSTRACT = 0x04;
    }
}

impl TypeModifiers {
    /// Extract the modifiers from raw `TypeAttributes`.
    ///
    /// A type that is both abstract and sealed is a static type and reports only
    /// [`TypeModifiers::STATIC`]. Interfaces are implicitly abstract and report nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backscope::metadata::declarations::TypeModifiers;
    ///
    /// assert_eq!(TypeModifiers::from_type_flags(0x0101), TypeModifiers::SEALED);
    /// assert_eq!(TypeModifiers::from_type_flags(0x0181), TypeModifiers::STATIC);
    /// ```
    #[must_use]
    pub fn from_type_flags(flags: u32) -> Self {
        if flags & crate::metadata::typesystem::TYPE_INTERFACE != 0 {
            return TypeModifiers::empty();
        }

        let is_abstract = flags & TYPE_ABSTRACT != 0;
        let is_sealed = flags & TYPE_SEALED != 0;
        match (is_abstract, is_sealed) {
            (true, true) => TypeModifiers::STATIC,
            (true, false) => TypeModifiers::ABSTRACT,
            (false, true) => TypeModifiers::SEALED,
            (false, false) => TypeModifiers::empty(),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Modifiers of a method declaration
    pub struct MethodModifiers: u8 {
        /// The method has no implementation
        const ABSTRACT = 0x01;
        /// The method has no instance
        const STATIC = 0x02;
        /// The method replaces an inherited virtual method
        const OVERRIDE = 0x04;
        /// The method is an operator overload
        const OPERATOR = 0x08;
    }
}

impl MethodModifiers {
    /// Extract the modifiers from raw `MethodAttributes` and the method name.
    ///
    /// A virtual method that reuses its vtable slot overrides an inherited one. An operator
    /// carries a special name starting with `op_`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backscope::metadata::declarations::MethodModifiers;
    ///
    /// // public hidebysig virtual
    /// assert_eq!(MethodModifiers::from_method_flags(0x00C6, "ToString"), MethodModifiers::OVERRIDE);
    /// // public hidebysig specialname static
    /// assert_eq!(
    ///     MethodModifiers::from_method_flags(0x0896, "op_Addition"),
    ///     MethodModifiers::STATIC | MethodModifiers::OPERATOR
    /// );
    /// ```
    #[must_use]
    pub fn from_method_flags(flags: u32, name: &str) -> Self {
        let mut modifiers = MethodModifiers::empty();

        if flags & METHOD_ABSTRACT != 0 {
            modifiers |= MethodModifiers::ABSTRACT;
        }
        if flags & METHOD_STATIC != 0 {
            modifiers |= MethodModifiers::STATIC;
        }
        if flags & METHOD_VIRTUAL != 0 && flags & METHOD_NEW_SLOT == 0 {
            modifiers |= MethodModifiers::OVERRIDE;
        }
        if flags & METHOD_SPECIAL_NAME != 0 && name.starts_with(OPERATOR_PREFIX) {
            modifiers |= MethodModifiers::OPERATOR;
        }

        modifiers
    }
}

/// A type definition with its members
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeDeclaration {
    /// The simple name
    pub name: String,
    /// The namespace, empty for the global namespace
    pub namespace: String,
    /// Class, struct, interface, enum or delegate
    pub kind: TypeKind,
    /// Accessibility level
    pub accessibility: Accessibility,
    /// Sealed / static / abstract
    pub modifiers: TypeModifiers,
    /// Direct base type and implemented interfaces, in declaration order
    pub base_types: Vec<TypeRef>,
    /// Fields in declaration order
    pub fields: Vec<FieldDeclaration>,
    /// Methods in declaration order
    pub methods: Vec<MethodDeclaration>,
    /// Marks the synthetic container that holds free functions and globals
    pub free_functions: bool,
}

impl TypeDeclaration {
    /// The namespace-qualified name
    #[must_use]
    pub fn full_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// A reference to this type
    #[must_use]
    pub fn to_type_ref(&self) -> TypeRef {
        TypeRef::new(&self.namespace, &self.name)
    }
}

/// A field of a type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    /// The field name
    pub name: String,
    /// The type of the field
    pub field_type: TypeRef,
    /// Accessibility level
    pub accessibility: Accessibility,
    /// Whether the field can only be assigned during initialization
    pub read_only: bool,
    /// The compile-time constant value, if any
    pub constant: Option<ConstantValue>,
}

/// A parameter of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
    /// The parameter name
    pub name: String,
    /// The type of the parameter
    pub parameter_type: TypeRef,
}

impl ParameterDeclaration {
    /// Create a new parameter
    #[must_use]
    pub fn new(name: &str, parameter_type: TypeRef) -> Self {
        ParameterDeclaration {
            name: name.to_string(),
            parameter_type,
        }
    }
}

/// A method of a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    /// The method name (`.ctor` / `.cctor` for constructors)
    pub name: String,
    /// Accessibility level
    pub accessibility: Accessibility,
    /// Abstract / static / override / operator
    pub modifiers: MethodModifiers,
    /// Whether the method is an instance or type initializer
    pub is_constructor: bool,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterDeclaration>,
    /// The return type, [`TypeRef::void`] for none
    pub return_type: TypeRef,
    /// The code of the method, `None` for methods without a body
    pub body: Option<MethodBody>,
}

impl MethodDeclaration {
    /// Returns `true` if the method carries code
    #[must_use]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}
