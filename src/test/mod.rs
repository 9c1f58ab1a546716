//! Declarations shared by the unit tests of several modules.

use crate::metadata::{
    builders::{FieldBuilder, MethodBuilder, TypeBuilder},
    declarations::TypeDeclaration,
    typesystem::{TypeKind, TypeRef},
};

/// `nop; ret`
pub const NOP_RET: [u8; 2] = [0x00, 0x2A];

/// `nop` followed by the lead byte of a two-byte opcode and nothing else
pub const TRUNCATED_BODY: [u8; 2] = [0x00, 0xFE];

/// A public value type with two read-only fields, a constructor and an override
pub fn point_type() -> TypeDeclaration {
    let int = TypeRef::system("Int32");

    TypeBuilder::new("Point")
        .namespace("Geometry")
        .public()
        .sealed()
        .kind(TypeKind::Struct)
        .base(TypeRef::system("ValueType"))
        .field(FieldBuilder::new("x", int.clone()).public().read_only().build())
        .field(FieldBuilder::new("y", int.clone()).public().read_only().build())
        .method(
            MethodBuilder::constructor()
                .public()
                .parameter("x", int.clone())
                .parameter("y", int)
                .code(NOP_RET)
                .build(),
        )
        .method(
            MethodBuilder::new("ToString")
                .public()
                .override_method()
                .returns(TypeRef::system("String"))
                .code(NOP_RET)
                .build(),
        )
        .build()
}

/// The free-function container of the `App` namespace
pub fn free_functions_type() -> TypeDeclaration {
    TypeBuilder::new("FreeFunctions")
        .namespace("App")
        .field(
            FieldBuilder::new("Version", TypeRef::system("Int32"))
                .public()
                .constant(3i32)
                .build(),
        )
        .method(
            MethodBuilder::new("Main")
                .public()
                .static_method()
                .parameter("args", TypeRef::system("String"))
                .code(NOP_RET)
                .build(),
        )
        .build()
}
