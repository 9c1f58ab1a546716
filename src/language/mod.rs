//! Source languages that declarations are projected into.
//!
//! A [`Language`] is a named strategy with a fixed capability set: it projects types, fields
//! and methods into a [`TextOutput`] and renders short display strings for them. [`Backlang`]
//! is the one implementation shipped with the crate. Hosts that keep a registry of languages
//! hold them as `Box<dyn Language>`.
//!
//! # Key Components
//!
//! - [`Backlang`] - The Backlang projection
//! - [`ProjectionOptions`] - Behavior switches of the projection
//! - [`style`] - Style table and primitive aliases
//! - [`literal`] - Constant literal rendering
//! - [`declaration`] / [`members`] - The type, field and method formatters
//!
//! # Examples
//!
//! ```rust
//! use backscope::{
//!     metadata::{builders::{FieldBuilder, TypeBuilder}, typesystem::TypeRef},
//!     output::PlainTextOutput,
//!     Backlang, Language,
//! };
//!
//! let point = TypeBuilder::new("Point")
//!     .namespace("Geometry")
//!     .public()
//!     .field(FieldBuilder::new("x", TypeRef::system("Int32")).read_only().build())
//!     .build();
//!
//! let mut output = PlainTextOutput::new();
//! Backlang::default().decompile_type(&point, &mut output);
//!
//! assert!(output.text().starts_with("module Geometry;\n\npublic class Point {\n"));
//! assert!(output.text().contains("    let x: i32;\n"));
//! ```

use rayon::prelude::*;

use crate::{
    metadata::{
        declarations::{FieldDeclaration, MethodDeclaration, TypeDeclaration},
        typesystem::{qualify, TypeRef},
    },
    output::{PlainTextOutput, TextOutput},
};

mod config;
pub mod declaration;
pub mod literal;
pub mod members;
pub mod style;

pub use config::ProjectionOptions;

/// A target language of the projection.
pub trait Language: Send + Sync {
    /// Display name of the language
    fn name(&self) -> &'static str;

    /// Extension of source files, including the leading dot
    fn file_extension(&self) -> &'static str;

    /// Extension of project files, including the leading dot
    fn project_file_extension(&self) -> &'static str;

    /// Project a type and all of its members
    fn decompile_type(&self, declaration: &TypeDeclaration, output: &mut dyn TextOutput);

    /// Project a single field
    fn decompile_field(&self, field: &FieldDeclaration, output: &mut dyn TextOutput);

    /// Project a single method
    fn decompile_method(&self, method: &MethodDeclaration, output: &mut dyn TextOutput);

    /// Display string of a type reference
    fn type_to_string(&self, type_ref: &TypeRef) -> String;

    /// Display string of a method of `declaring_type`
    fn method_to_string(
        &self,
        declaring_type: &TypeDeclaration,
        method: &MethodDeclaration,
    ) -> String;

    /// Display string of a field of `declaring_type`
    fn field_to_string(&self, declaring_type: &TypeDeclaration, field: &FieldDeclaration)
        -> String;
}

/// The Backlang projection.
#[derive(Debug, Clone, Default)]
pub struct Backlang {
    options: ProjectionOptions,
}

impl Backlang {
    /// Display name of the language
    pub const NAME: &'static str = "Backlang";
    /// Extension of Backlang source files
    pub const FILE_EXTENSION: &'static str = ".back";
    /// Extension of Backlang project files
    pub const PROJECT_FILE_EXTENSION: &'static str = ".backproj";

    /// Create a projection with the given options
    #[must_use]
    pub fn new(options: ProjectionOptions) -> Self {
        Backlang { options }
    }

    /// The options of this projection
    #[must_use]
    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    /// Project many independent types in parallel.
    ///
    /// Every type is written into its own [`PlainTextOutput`]; the texts are returned in the
    /// order of `declarations`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backscope::{metadata::builders::TypeBuilder, Backlang};
    ///
    /// let types = [TypeBuilder::new("A").build(), TypeBuilder::new("B").build()];
    /// let texts = Backlang::default().decompile_types(&types);
    ///
    /// assert!(texts[0].starts_with("class A {"));
    /// assert!(texts[1].starts_with("class B {"));
    /// ```
    #[must_use]
    pub fn decompile_types(&self, declarations: &[TypeDeclaration]) -> Vec<String> {
        declarations
            .par_iter()
            .map(|declaration| {
                let mut output = PlainTextOutput::new();
                self.decompile_type(declaration, &mut output);
                output.into_text()
            })
            .collect()
    }
}

impl Language for Backlang {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn file_extension(&self) -> &'static str {
        Self::FILE_EXTENSION
    }

    fn project_file_extension(&self) -> &'static str {
        Self::PROJECT_FILE_EXTENSION
    }

    fn decompile_type(&self, declaration: &TypeDeclaration, output: &mut dyn TextOutput) {
        declaration::write_type(output, declaration, &self.options);
    }

    fn decompile_field(&self, field: &FieldDeclaration, output: &mut dyn TextOutput) {
        members::write_field(output, field, &self.options);
    }

    fn decompile_method(&self, method: &MethodDeclaration, output: &mut dyn TextOutput) {
        members::write_method(output, method, &self.options);
    }

    fn type_to_string(&self, type_ref: &TypeRef) -> String {
        type_ref.full_name.clone()
    }

    fn method_to_string(
        &self,
        declaring_type: &TypeDeclaration,
        method: &MethodDeclaration,
    ) -> String {
        qualify(&declaring_type.full_name(), &method.name)
    }

    fn field_to_string(&self, declaring_type: &TypeDeclaration, field: &FieldDeclaration) -> String {
        qualify(&declaring_type.full_name(), &field.name)
    }
}
