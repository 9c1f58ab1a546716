// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # backscope
//!
//! Projects .NET type metadata and CIL method bodies into the source text of Backlang, a
//! Rust-flavored surface language. `backscope` is the language-binding layer of a decompiler
//! host: it takes declarations that an upstream metadata reader has already resolved and writes
//! them into a structured, append-only text sink with syntax styling, navigable references,
//! indentation and fold regions.
//!
//! ## Features
//!
//! - **Declaration projection** - Types, fields and methods in Backlang surface syntax
//! - **Structured output** - Styled spans, references, folds and indentation through [`output::TextOutput`]
//! - **Opcode decoding** - Lazy one- and two-byte CIL opcode tokenization of method bodies
//! - **Model readers** - Attribute words, constant blobs and tiny/fat method headers
//! - **Parallel batches** - Independent types projected on a rayon thread pool
//!
//! ## Quick Start
//!
//! ```rust
//! use backscope::prelude::*;
//!
//! let point = TypeBuilder::new("Point")
//!     .namespace("Geometry")
//!     .public()
//!     .field(FieldBuilder::new("x", TypeRef::system("Int32")).read_only().build())
//!     .method(MethodBuilder::constructor().public().code(vec![0x2A]).build())
//!     .build();
//!
//! let mut output = PlainTextOutput::new();
//! Backlang::default().decompile_type(&point, &mut output);
//!
//! assert_eq!(
//!     output.text(),
//!     "module Geometry;\n\
//!      \n\
//!      public class Point {\n\
//!      \n    let x: i32;\n\
//!      }\n\
//!      \n\
//!      implement Point {\n    public constructor() {\n    }\n\n\n\
//!      }\n"
//! );
//! assert!(output.is_balanced());
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - The declaration model and its readers
//! - [`disassembler`] - CIL opcode decoding
//! - [`output`] - The text sink trait and the bundled sinks
//! - [`language`] - The [`Language`] trait and the [`Backlang`] projection
//!
//! Formatting never fails. Undecodable method bodies are logged through the `log` facade and
//! their blocks are still closed, so a sink always receives balanced spans, indentation and
//! folds.
//!
//! ## Error Handling
//!
//! Only the byte-level readers return [`Result`]: the [`Parser`], the opcode decoder and the
//! constant and method header readers in [`metadata`].

#[macro_use]
pub(crate) mod error;
pub(crate) mod parser;

/// Shared fixtures for unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use backscope::prelude::*;
///
/// let method = MethodBuilder::new("Run").public().build();
/// let mut output = RecordingOutput::new();
/// Backlang::default().decompile_method(&method, &mut output);
///
/// assert_eq!(output.text(), "public func Run();\n");
/// ```
pub mod prelude;

/// CIL opcode decoding of method bodies
pub mod disassembler;

/// Target languages of the projection
pub mod language;

/// Declarations of .NET types and members
pub mod metadata;

/// Structured text sinks
pub mod output;

/// `backscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use backscope::{metadata::body::MethodBody, Result};
///
/// fn code_size(raw: &[u8]) -> Result<usize> {
///     Ok(MethodBody::parse(raw)?.code.len())
/// }
///
/// assert_eq!(code_size(&[0x0A, 0x00, 0x2A]).unwrap(), 2);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `backscope` Error type
///
/// Returned by the byte-level readers when their input is truncated or damaged.
pub use error::Error;

/// Bounds-checked little-endian reader over a byte slice.
///
/// # Example
///
/// ```rust
/// use backscope::Parser;
///
/// let mut parser = Parser::new(&[0x2A, 0x01, 0x00]);
/// assert_eq!(parser.read_le::<u8>()?, 0x2A);
/// assert_eq!(parser.read_le::<u16>()?, 1);
/// assert!(!parser.has_more_data());
/// # Ok::<(), backscope::Error>(())
/// ```
pub use parser::{Parser, ReadLe};

pub use language::{Backlang, Language, ProjectionOptions};
