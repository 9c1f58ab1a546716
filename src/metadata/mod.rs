//! Declaration model of .NET types and members.
//!
//! This module holds the read-only input of the projection: type, field, method and parameter
//! declarations together with the type references, constants and method bodies they carry.
//! The model is plain owned data so any upstream metadata reader can fill it; the small readers
//! on the model types map raw ECMA-335 attribute words, constant blobs and method headers.
//!
//! # Key Components
//!
//! - [`declarations`] - [`declarations::TypeDeclaration`] and its members, modifier flag sets
//! - [`typesystem`] - Type references, declaration kinds and accessibility levels
//! - [`constant`] - Field constants and the Constant-table blob reader
//! - [`body`] - Method code and the tiny/fat method header reader
//! - [`builders`] - Fluent builders for the declarations
//!
//! # Examples
//!
//! ```rust
//! use backscope::metadata::{
//!     declarations::MethodModifiers,
//!     typesystem::Accessibility,
//! };
//!
//! // public hidebysig virtual instance string ToString()
//! let flags = 0x00C6;
//! assert_eq!(Accessibility::from_method_flags(flags), Accessibility::Public);
//! assert!(MethodModifiers::from_method_flags(flags, "ToString").contains(MethodModifiers::OVERRIDE));
//! ```

/// Method code and method headers
pub mod body;
/// Builders for the declaration model
pub mod builders;
/// Constant values of fields
pub mod constant;
/// Type and member declarations
pub mod declarations;
/// Type references, kinds and accessibility
pub mod typesystem;
