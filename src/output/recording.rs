//! Event-recording sink.

use crate::output::{Reference, Style, TextOutput};

/// One call made on a [`TextOutput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEvent {
    /// [`TextOutput::write`]
    Text(String),
    /// [`TextOutput::write_line`]
    LineBreak,
    /// [`TextOutput::write_reference`]
    Reference {
        /// Name of the referenced entity
        target: String,
        /// Visible token text
        text: String,
        /// Whether the token is the defining occurrence
        is_definition: bool,
    },
    /// [`TextOutput::begin_span`]
    BeginSpan(Style),
    /// [`TextOutput::end_span`]
    EndSpan,
    /// [`TextOutput::indent`]
    Indent,
    /// [`TextOutput::unindent`]
    Unindent,
    /// [`TextOutput::mark_fold_start`]
    FoldStart,
    /// [`TextOutput::mark_fold_end`]
    FoldEnd,
}

/// A [`TextOutput`] that keeps every call as an [`OutputEvent`].
///
/// Used to inspect what a formatter emitted beyond the rendered text: which tokens were styled
/// how, and whether folds, spans and indentation were balanced at every point of the trace.
///
/// # Examples
///
/// ```rust
/// use backscope::output::{OutputEvent, RecordingOutput, TextOutput};
///
/// let mut output = RecordingOutput::new();
/// output.mark_fold_start();
/// output.write("{}");
/// output.mark_fold_end();
///
/// assert_eq!(output.events()[1], OutputEvent::Text("{}".to_string()));
/// assert!(output.is_balanced());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    events: Vec<OutputEvent>,
}

impl RecordingOutput {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in call order
    #[must_use]
    pub fn events(&self) -> &[OutputEvent] {
        &self.events
    }

    /// Number of events equal to `event`
    #[must_use]
    pub fn count(&self, event: &OutputEvent) -> usize {
        self.events.iter().filter(|recorded| *recorded == event).count()
    }

    /// The written text without indentation
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        for event in &self.events {
            match event {
                OutputEvent::Text(written) | OutputEvent::Reference { text: written, .. } => {
                    text.push_str(written);
                }
                OutputEvent::LineBreak => text.push('\n'),
                _ => {}
            }
        }
        text
    }

    /// Every written token with the innermost style active when it was written
    #[must_use]
    pub fn styled_tokens(&self) -> Vec<(Option<Style>, String)> {
        let mut styles: Vec<Style> = Vec::new();
        let mut tokens = Vec::new();

        for event in &self.events {
            match event {
                OutputEvent::BeginSpan(style) => styles.push(*style),
                OutputEvent::EndSpan => {
                    styles.pop();
                }
                OutputEvent::Text(written) | OutputEvent::Reference { text: written, .. } => {
                    tokens.push((styles.last().copied(), written.clone()));
                }
                _ => {}
            }
        }

        tokens
    }

    /// Returns `true` if folds, spans and indentation never close more than they opened and
    /// all of them are closed at the end of the trace
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut folds = 0usize;
        let mut spans = 0usize;
        let mut indent = 0usize;

        for event in &self.events {
            let depth = match event {
                OutputEvent::FoldStart => {
                    folds += 1;
                    continue;
                }
                OutputEvent::BeginSpan(_) => {
                    spans += 1;
                    continue;
                }
                OutputEvent::Indent => {
                    indent += 1;
                    continue;
                }
                OutputEvent::FoldEnd => &mut folds,
                OutputEvent::EndSpan => &mut spans,
                OutputEvent::Unindent => &mut indent,
                _ => continue,
            };

            match depth.checked_sub(1) {
                Some(lowered) => *depth = lowered,
                None => return false,
            }
        }

        folds == 0 && spans == 0 && indent == 0
    }
}

impl TextOutput for RecordingOutput {
    fn write(&mut self, text: &str) {
        self.events.push(OutputEvent::Text(text.to_string()));
    }

    fn write_line(&mut self) {
        self.events.push(OutputEvent::LineBreak);
    }

    fn write_reference(&mut self, reference: Reference<'_>, text: &str, is_definition: bool) {
        self.events.push(OutputEvent::Reference {
            target: reference.target(),
            text: text.to_string(),
            is_definition,
        });
    }

    fn begin_span(&mut self, style: Style) {
        self.events.push(OutputEvent::BeginSpan(style));
    }

    fn end_span(&mut self) {
        self.events.push(OutputEvent::EndSpan);
    }

    fn indent(&mut self) {
        self.events.push(OutputEvent::Indent);
    }

    fn unindent(&mut self) {
        self.events.push(OutputEvent::Unindent);
    }

    fn mark_fold_start(&mut self) {
        self.events.push(OutputEvent::FoldStart);
    }

    fn mark_fold_end(&mut self) {
        self.events.push(OutputEvent::FoldEnd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Color;

    const TYPE: Style = Style {
        name: "Type",
        foreground: Color::rgb(0xAD, 0xD8, 0xE6),
    };

    #[test]
    fn balance() {
        let mut output = RecordingOutput::new();
        output.indent();
        output.mark_fold_start();
        output.mark_fold_end();
        output.unindent();
        assert!(output.is_balanced());

        let mut early_close = RecordingOutput::new();
        early_close.mark_fold_end();
        early_close.mark_fold_start();
        assert!(!early_close.is_balanced());

        let mut left_open = RecordingOutput::new();
        left_open.begin_span(TYPE);
        assert!(!left_open.is_balanced());
    }

    #[test]
    fn styled_tokens() {
        let mut output = RecordingOutput::new();
        output.write("x: ");
        output.begin_span(TYPE);
        output.write("i32");
        output.end_span();

        assert_eq!(
            output.styled_tokens(),
            vec![(None, "x: ".to_string()), (Some(TYPE), "i32".to_string())]
        );
        assert_eq!(output.text(), "x: i32");
        assert_eq!(output.count(&OutputEvent::EndSpan), 1);
    }
}
