//! # backscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the backscope library. Import this module to get quick access to everything needed
//! to build declarations and project them into a text sink.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all backscope operations
pub use crate::Error;

/// The result type used throughout backscope
pub use crate::Result;

/// Low-level byte reader
pub use crate::Parser;

// ================================================================================================
// Languages
// ================================================================================================

/// Projection into Backlang and its options
pub use crate::language::{Backlang, Language, ProjectionOptions};

/// Style table of the projection
pub use crate::language::style::{
    StyleCategory, ANNOTATION_STYLE, KEYWORD_STYLE, STRING_STYLE, TYPE_STYLE,
};

// ================================================================================================
// Declaration Model
// ================================================================================================

/// Types and members
pub use crate::metadata::declarations::{
    FieldDeclaration, MethodDeclaration, MethodModifiers, ParameterDeclaration, TypeDeclaration,
    TypeModifiers,
};

/// Type references, kinds and accessibility
pub use crate::metadata::typesystem::{Accessibility, TypeKind, TypeRef};

/// Field constants and method bodies
pub use crate::metadata::{body::MethodBody, constant::ConstantValue};

/// Fluent builders for the declaration model
pub use crate::metadata::builders::{FieldBuilder, MethodBuilder, TypeBuilder};

// ================================================================================================
// Output
// ================================================================================================

/// Text sinks
pub use crate::output::{
    Color, OutputEvent, PlainTextOutput, RecordingOutput, Reference, Style, TextOutput,
};

// ================================================================================================
// Disassembly
// ================================================================================================

/// Opcode decoding
pub use crate::disassembler::{decode_opcodes, Opcode};
