//! # Declaration Builders
//!
//! Fluent builders for the declaration model. Hosts that read metadata themselves can fill the
//! declaration structs directly; the builders exist for hosts that assemble declarations by hand
//! and for tests.
//!
//! ## Usage
//!
//! ```rust
//! use backscope::metadata::{
//!     builders::{FieldBuilder, MethodBuilder, TypeBuilder},
//!     typesystem::TypeRef,
//! };
//!
//! let point = TypeBuilder::new("Point")
//!     .namespace("Geometry")
//!     .public()
//!     .field(FieldBuilder::new("X", TypeRef::system("Int32")).public().build())
//!     .method(
//!         MethodBuilder::new("Length")
//!             .public()
//!             .returns(TypeRef::system("Double"))
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(point.full_name(), "Geometry.Point");
//! assert_eq!(point.fields.len(), 1);
//! assert!(!point.methods[0].has_body());
//! ```

use crate::metadata::{
    body::MethodBody,
    constant::ConstantValue,
    declarations::{
        FieldDeclaration, MethodDeclaration, MethodModifiers, ParameterDeclaration,
        TypeDeclaration, TypeModifiers,
    },
    typesystem::{Accessibility, TypeKind, TypeRef},
};

/// Conventional name of the synthetic type that holds free functions and globals
pub const FREE_FUNCTIONS_CONTAINER: &str = "FreeFunctions";

/// Name of instance constructors
pub const CONSTRUCTOR_NAME: &str = ".ctor";

/// Builder for [`TypeDeclaration`]
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    declaration: TypeDeclaration,
}

impl TypeBuilder {
    /// Start a class named `name` in the global namespace.
    ///
    /// A type named [`FREE_FUNCTIONS_CONTAINER`] is marked as the free-function container.
    #[must_use]
    pub fn new(name: &str) -> Self {
        TypeBuilder {
            declaration: TypeDeclaration {
                name: name.to_string(),
                free_functions: name == FREE_FUNCTIONS_CONTAINER,
                ..Default::default()
            },
        }
    }

    /// Sets the namespace
    #[must_use]
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.declaration.namespace = namespace.to_string();
        self
    }

    /// Sets the kind of the type
    #[must_use]
    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.declaration.kind = kind;
        self
    }

    /// Sets the accessibility level
    #[must_use]
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.declaration.accessibility = accessibility;
        self
    }

    /// Marks the type as public
    #[must_use]
    pub fn public(self) -> Self {
        self.accessibility(Accessibility::Public)
    }

    /// Marks the type as internal
    #[must_use]
    pub fn internal(self) -> Self {
        self.accessibility(Accessibility::Internal)
    }

    /// Adds modifiers to the type
    #[must_use]
    pub fn modifiers(mut self, modifiers: TypeModifiers) -> Self {
        self.declaration.modifiers |= modifiers;
        self
    }

    /// Marks the type as sealed
    #[must_use]
    pub fn sealed(self) -> Self {
        self.modifiers(TypeModifiers::SEALED)
    }

    /// Marks the type as static
    #[must_use]
    pub fn static_type(self) -> Self {
        self.modifiers(TypeModifiers::STATIC)
    }

    /// Marks the type as abstract
    #[must_use]
    pub fn abstract_type(self) -> Self {
        self.modifiers(TypeModifiers::ABSTRACT)
    }

    /// Appends a base type or implemented interface
    #[must_use]
    pub fn base(mut self, base: TypeRef) -> Self {
        self.declaration.base_types.push(base);
        self
    }

    /// Appends a field
    #[must_use]
    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.declaration.fields.push(field);
        self
    }

    /// Appends a method
    #[must_use]
    pub fn method(mut self, method: MethodDeclaration) -> Self {
        self.declaration.methods.push(method);
        self
    }

    /// Overrides the free-function container marker
    #[must_use]
    pub fn free_functions(mut self, free_functions: bool) -> Self {
        self.declaration.free_functions = free_functions;
        self
    }

    /// Finish the declaration
    #[must_use]
    pub fn build(self) -> TypeDeclaration {
        self.declaration
    }
}

/// Builder for [`FieldDeclaration`]
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    declaration: FieldDeclaration,
}

impl FieldBuilder {
    /// Start a mutable field without accessibility keyword
    #[must_use]
    pub fn new(name: &str, field_type: TypeRef) -> Self {
        FieldBuilder {
            declaration: FieldDeclaration {
                name: name.to_string(),
                field_type,
                accessibility: Accessibility::None,
                read_only: false,
                constant: None,
            },
        }
    }

    /// Sets the accessibility level
    #[must_use]
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.declaration.accessibility = accessibility;
        self
    }

    /// Marks the field as public
    #[must_use]
    pub fn public(self) -> Self {
        self.accessibility(Accessibility::Public)
    }

    /// Marks the field as private
    #[must_use]
    pub fn private(self) -> Self {
        self.accessibility(Accessibility::Private)
    }

    /// Marks the field as read-only
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.declaration.read_only = true;
        self
    }

    /// Attaches a constant value; constants are read-only
    #[must_use]
    pub fn constant(mut self, value: impl Into<ConstantValue>) -> Self {
        self.declaration.constant = Some(value.into());
        self.declaration.read_only = true;
        self
    }

    /// Finish the declaration
    #[must_use]
    pub fn build(self) -> FieldDeclaration {
        self.declaration
    }
}

/// Builder for [`MethodDeclaration`]
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    declaration: MethodDeclaration,
}

impl MethodBuilder {
    /// Start a bodiless method returning `void`
    #[must_use]
    pub fn new(name: &str) -> Self {
        MethodBuilder {
            declaration: MethodDeclaration {
                name: name.to_string(),
                accessibility: Accessibility::None,
                modifiers: MethodModifiers::empty(),
                is_constructor: false,
                parameters: Vec::new(),
                return_type: TypeRef::void(),
                body: None,
            },
        }
    }

    /// Start an instance constructor
    #[must_use]
    pub fn constructor() -> Self {
        let mut builder = Self::new(CONSTRUCTOR_NAME);
        builder.declaration.is_constructor = true;
        builder
    }

    /// Sets the accessibility level
    #[must_use]
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.declaration.accessibility = accessibility;
        self
    }

    /// Marks the method as public
    #[must_use]
    pub fn public(self) -> Self {
        self.accessibility(Accessibility::Public)
    }

    /// Marks the method as private
    #[must_use]
    pub fn private(self) -> Self {
        self.accessibility(Accessibility::Private)
    }

    /// Marks the method as protected
    #[must_use]
    pub fn protected(self) -> Self {
        self.accessibility(Accessibility::Protected)
    }

    /// Adds modifiers to the method
    #[must_use]
    pub fn modifiers(mut self, modifiers: MethodModifiers) -> Self {
        self.declaration.modifiers |= modifiers;
        self
    }

    /// Marks the method as static
    #[must_use]
    pub fn static_method(self) -> Self {
        self.modifiers(MethodModifiers::STATIC)
    }

    /// Marks the method as abstract
    #[must_use]
    pub fn abstract_method(self) -> Self {
        self.modifiers(MethodModifiers::ABSTRACT)
    }

    /// Marks the method as overriding an inherited one
    #[must_use]
    pub fn override_method(self) -> Self {
        self.modifiers(MethodModifiers::OVERRIDE)
    }

    /// Appends a parameter
    #[must_use]
    pub fn parameter(mut self, name: &str, parameter_type: TypeRef) -> Self {
        self.declaration
            .parameters
            .push(ParameterDeclaration::new(name, parameter_type));
        self
    }

    /// Sets the return type
    #[must_use]
    pub fn returns(mut self, return_type: TypeRef) -> Self {
        self.declaration.return_type = return_type;
        self
    }

    /// Attaches a body
    #[must_use]
    pub fn body(mut self, body: MethodBody) -> Self {
        self.declaration.body = Some(body);
        self
    }

    /// Attaches a body made of raw code bytes
    #[must_use]
    pub fn code(self, code: impl Into<Vec<u8>>) -> Self {
        self.body(MethodBody::new(code))
    }

    /// Finish the declaration
    #[must_use]
    pub fn build(self) -> MethodDeclaration {
        self.declaration
    }
}
