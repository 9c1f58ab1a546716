//! Plain text sink with fold, span and reference bookkeeping.

use std::fmt;

use crate::output::{Reference, Style, TextOutput};

/// Default indentation unit
pub const DEFAULT_INDENTATION: &str = "    ";

/// A closed fold region, as byte offsets into the text and 1-based line numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fold {
    /// Offset where the region opened
    pub start: usize,
    /// Offset where the region closed
    pub end: usize,
    /// Line the region opened on
    pub start_line: usize,
    /// Line the region closed on
    pub end_line: usize,
}

/// A styled byte range of the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
    /// The style of the range
    pub style: Style,
}

/// A reference token's byte range of the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSpan {
    /// Start offset, inclusive
    pub start: usize,
    /// End offset, exclusive
    pub end: usize,
    /// Name of the referenced entity, see [`Reference::target`]
    pub target: String,
    /// Whether the token is the defining occurrence
    pub is_definition: bool,
}

/// A [`TextOutput`] rendering into a `String`.
///
/// Indentation is written lazily at the first text of a line, so blank lines stay empty.
/// Closed folds, styled spans and reference tokens are kept as byte ranges of the text.
///
/// # Examples
///
/// ```rust
/// use backscope::output::{PlainTextOutput, TextOutput};
///
/// let mut output = PlainTextOutput::with_indentation("\t");
/// output.write("{");
/// output.mark_fold_start();
/// output.write_line();
/// output.indent();
/// output.write_line();
/// output.unindent();
/// output.write("}");
/// output.mark_fold_end();
///
/// assert_eq!(output.text(), "{\n\n}");
/// assert_eq!(output.folds()[0].start_line, 1);
/// assert_eq!(output.folds()[0].end_line, 3);
/// assert!(output.is_balanced());
/// ```
#[derive(Debug, Clone)]
pub struct PlainTextOutput {
    text: String,
    indentation: String,
    indent: usize,
    needs_indent: bool,
    line: usize,
    open_folds: Vec<(usize, usize)>,
    folds: Vec<Fold>,
    open_spans: Vec<(Style, usize)>,
    spans: Vec<StyledSpan>,
    references: Vec<ReferenceSpan>,
    // Set once a close arrived with nothing open
    overclosed: bool,
}

impl PlainTextOutput {
    /// Create an empty sink indenting with [`DEFAULT_INDENTATION`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_indentation(DEFAULT_INDENTATION)
    }

    /// Create an empty sink using `indentation` as the indentation unit
    #[must_use]
    pub fn with_indentation(indentation: &str) -> Self {
        PlainTextOutput {
            text: String::new(),
            indentation: indentation.to_string(),
            indent: 0,
            needs_indent: true,
            line: 1,
            open_folds: Vec::new(),
            folds: Vec::new(),
            open_spans: Vec::new(),
            spans: Vec::new(),
            references: Vec::new(),
            overclosed: false,
        }
    }

    /// The text written so far
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the sink, returning its text
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Fold regions in the order they were closed
    #[must_use]
    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    /// Styled spans in the order they were closed
    #[must_use]
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// Reference tokens in the order they were written
    #[must_use]
    pub fn references(&self) -> &[ReferenceSpan] {
        &self.references
    }

    /// Reference tokens that are defining occurrences
    pub fn definitions(&self) -> impl Iterator<Item = &ReferenceSpan> {
        self.references.iter().filter(|reference| reference.is_definition)
    }

    /// The text covered by a byte range, empty for ranges outside the text
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &str {
        self.text.get(start..end).unwrap_or_default()
    }

    /// The current indentation level
    #[must_use]
    pub fn indentation_level(&self) -> usize {
        self.indent
    }

    /// Returns `true` if no fold or span is open, the indentation is back at zero and no
    /// fold, span or indentation level was ever closed without being open
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        !self.overclosed
            && self.open_folds.is_empty()
            && self.open_spans.is_empty()
            && self.indent == 0
    }

    fn write_indent(&mut self) {
        if self.needs_indent {
            self.needs_indent = false;
            for _ in 0..self.indent {
                self.text.push_str(&self.indentation);
            }
        }
    }
}

impl Default for PlainTextOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlainTextOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TextOutput for PlainTextOutput {
    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        self.write_indent();
        self.text.push_str(text);
    }

    fn write_line(&mut self) {
        self.text.push('\n');
        self.needs_indent = true;
        self.line += 1;
    }

    fn write_reference(&mut self, reference: Reference<'_>, text: &str, is_definition: bool) {
        self.write_indent();

        let start = self.text.len();
        self.text.push_str(text);
        self.references.push(ReferenceSpan {
            start,
            end: self.text.len(),
            target: reference.target(),
            is_definition,
        });
    }

    fn begin_span(&mut self, style: Style) {
        // Indentation belongs to the line, not to the span
        self.write_indent();
        self.open_spans.push((style, self.text.len()));
    }

    fn end_span(&mut self) {
        match self.open_spans.pop() {
            Some((style, start)) => self.spans.push(StyledSpan {
                start,
                end: self.text.len(),
                style,
            }),
            None => self.overclosed = true,
        }
    }

    fn indent(&mut self) {
        self.indent += 1;
    }

    fn unindent(&mut self) {
        match self.indent.checked_sub(1) {
            Some(indent) => self.indent = indent,
            None => self.overclosed = true,
        }
    }

    fn mark_fold_start(&mut self) {
        self.open_folds.push((self.text.len(), self.line));
    }

    fn mark_fold_end(&mut self) {
        match self.open_folds.pop() {
            Some((start, start_line)) => self.folds.push(Fold {
                start,
                end: self.text.len(),
                start_line,
                end_line: self.line,
            }),
            None => self.overclosed = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::typesystem::TypeRef, output::Color};

    const KEYWORD: Style = Style {
        name: "Keyword",
        foreground: Color::rgb(0x00, 0x00, 0xFF),
    };

    #[test]
    fn lazy_indentation() {
        let mut output = PlainTextOutput::new();
        output.indent();
        output.write("a");
        output.write_line();
        output.write_line();
        output.indent();
        output.write("b");
        output.unindent();
        output.unindent();

        assert_eq!(output.text(), "    a\n\n        b");
        assert!(output.is_balanced());
    }

    #[test]
    fn spans_exclude_indentation() {
        let mut output = PlainTextOutput::with_indentation("\t");
        output.indent();
        output.begin_span(KEYWORD);
        output.write("let ");
        output.end_span();
        output.write("x");
        output.unindent();

        assert_eq!(output.text(), "\tlet x");
        let span = output.spans()[0];
        assert_eq!(output.slice(span.start, span.end), "let ");
        assert_eq!(span.style, KEYWORD);
    }

    #[test]
    fn references() {
        let int = TypeRef::system("Int32");
        let mut output = PlainTextOutput::new();
        output.write("x: ");
        output.write_reference(Reference::Type(&int), "i32", false);

        let reference = &output.references()[0];
        assert_eq!(output.slice(reference.start, reference.end), "i32");
        assert_eq!(reference.target, "System.Int32");
        assert!(!reference.is_definition);
        assert_eq!(output.definitions().count(), 0);
    }

    #[test]
    fn nested_folds() {
        let mut output = PlainTextOutput::new();
        output.mark_fold_start();
        output.write("outer");
        output.write_line();
        output.mark_fold_start();
        output.write("inner");
        output.mark_fold_end();
        output.write_line();
        output.mark_fold_end();

        let folds = output.folds();
        assert_eq!(folds.len(), 2);
        // Inner region closes first
        assert_eq!(output.slice(folds[0].start, folds[0].end), "inner");
        assert_eq!(folds[1].start, 0);
        assert_eq!(folds[1].end_line, 3);
        assert!(output.is_balanced());
    }

    #[test]
    fn unbalanced_markers() {
        let mut output = PlainTextOutput::new();
        output.mark_fold_start();
        assert!(!output.is_balanced());
        output.mark_fold_end();
        assert!(output.is_balanced());
    }

    #[test]
    fn stray_closers_unbalance() {
        let mut output = PlainTextOutput::new();
        output.mark_fold_start();
        output.mark_fold_end();
        output.mark_fold_end();
        output.unindent();
        assert!(!output.is_balanced());
        assert_eq!(output.folds().len(), 1);
        assert_eq!(output.indentation_level(), 0);

        let mut output = PlainTextOutput::new();
        output.end_span();
        assert!(!output.is_balanced());

        let mut output = PlainTextOutput::new();
        output.indent();
        output.unindent();
        output.unindent();
        assert!(!output.is_balanced());

        // Reopening later does not hide the earlier underflow
        output.indent();
        output.unindent();
        assert!(!output.is_balanced());
    }
}
