//! Text sinks for projected source.
//!
//! The projection never builds strings itself; it drives a [`TextOutput`], an append-only stream
//! that understands styled spans, references bound to declarations, indentation and fold regions.
//! Hosts with a rich rendering surface implement the trait themselves. Two sinks ship with the
//! crate:
//!
//! - [`PlainTextOutput`] - Renders indented text and records folds, spans and references
//! - [`RecordingOutput`] - Records the raw event stream, for inspection and balance checks
//!
//! # Example
//!
//! ```rust
//! use backscope::output::{PlainTextOutput, TextOutput};
//!
//! let mut output = PlainTextOutput::new();
//! output.write("outer {");
//! output.write_line();
//! output.indent();
//! output.write("inner");
//! output.write_line();
//! output.unindent();
//! output.write("}");
//!
//! assert_eq!(output.text(), "outer {\n    inner\n}");
//! ```

use std::fmt;

use crate::metadata::declarations::{FieldDeclaration, MethodDeclaration, TypeDeclaration};
use crate::metadata::typesystem::TypeRef;

mod plain;
mod recording;

pub use plain::{Fold, PlainTextOutput, ReferenceSpan, StyledSpan};
pub use recording::{OutputEvent, RecordingOutput};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A display style applied to a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Name of the lexical category the style belongs to
    pub name: &'static str,
    /// Foreground color
    pub foreground: Color,
}

/// The entity a reference token is bound to
#[derive(Debug, Clone, Copy)]
pub enum Reference<'a> {
    /// A use of a type
    Type(&'a TypeRef),
    /// A declared type
    Definition(&'a TypeDeclaration),
    /// A declared field
    Field(&'a FieldDeclaration),
    /// A declared method
    Method(&'a MethodDeclaration),
}

impl Reference<'_> {
    /// Name identifying the referenced entity
    #[must_use]
    pub fn target(&self) -> String {
        match self {
            Reference::Type(type_ref) => type_ref.full_name.clone(),
            Reference::Definition(declaration) => declaration.full_name(),
            Reference::Field(field) => field.name.clone(),
            Reference::Method(method) => method.name.clone(),
        }
    }
}

/// An append-only stream of styled, foldable source text.
///
/// Every [`TextOutput::begin_span`] is closed by one [`TextOutput::end_span`], every
/// [`TextOutput::indent`] by one [`TextOutput::unindent`], and fold regions nest like
/// parentheses. Sinks are written by one formatting call at a time and are never shared.
pub trait TextOutput {
    /// Append raw text
    fn write(&mut self, text: &str);

    /// Terminate the current line
    fn write_line(&mut self);

    /// Append a token bound to an entity.
    ///
    /// ## Arguments
    /// * `reference`     - The entity the token refers to
    /// * `text`          - The visible token text
    /// * `is_definition` - `true` at the defining occurrence of the entity
    fn write_reference(&mut self, reference: Reference<'_>, text: &str, is_definition: bool);

    /// Start a span of styled text
    fn begin_span(&mut self, style: Style);

    /// End the innermost styled span
    fn end_span(&mut self);

    /// Increase the indentation of the lines that follow
    fn indent(&mut self);

    /// Decrease the indentation of the lines that follow
    fn unindent(&mut self);

    /// Open a fold region at the current position
    fn mark_fold_start(&mut self);

    /// Close the innermost fold region at the current position
    fn mark_fold_end(&mut self);
}

impl<T: TextOutput + ?Sized> TextOutput for &mut T {
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }

    fn write_line(&mut self) {
        (**self).write_line();
    }

    fn write_reference(&mut self, reference: Reference<'_>, text: &str, is_definition: bool) {
        (**self).write_reference(reference, text, is_definition);
    }

    fn begin_span(&mut self, style: Style) {
        (**self).begin_span(style);
    }

    fn end_span(&mut self) {
        (**self).end_span();
    }

    fn indent(&mut self) {
        (**self).indent();
    }

    fn unindent(&mut self) {
        (**self).unindent();
    }

    fn mark_fold_start(&mut self) {
        (**self).mark_fold_start();
    }

    fn mark_fold_end(&mut self) {
        (**self).mark_fold_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::builders::{FieldBuilder, MethodBuilder, TypeBuilder};

    #[test]
    fn color_display() {
        assert_eq!(Color::rgb(0x00, 0x00, 0xFF).to_string(), "#0000FF");
        assert_eq!(Color::rgb(0xDB, 0x70, 0x93).to_string(), "#DB7093");
    }

    #[test]
    fn reference_targets() {
        let type_ref = TypeRef::system("Int32");
        assert_eq!(Reference::Type(&type_ref).target(), "System.Int32");

        let declaration = TypeBuilder::new("Point").namespace("Geometry").build();
        assert_eq!(Reference::Definition(&declaration).target(), "Geometry.Point");

        let field = FieldBuilder::new("x", TypeRef::system("Int32")).build();
        assert_eq!(Reference::Field(&field).target(), "x");

        let method = MethodBuilder::constructor().build();
        assert_eq!(Reference::Method(&method).target(), ".ctor");
    }

    fn emit_line(mut output: impl TextOutput, text: &str) {
        output.write(text);
        output.write_line();
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut output = RecordingOutput::new();
        emit_line(&mut output, "a");
        emit_line(&mut output, "b");

        assert_eq!(output.events().len(), 4);
        assert_eq!(output.text(), "a\nb\n");
    }
}
