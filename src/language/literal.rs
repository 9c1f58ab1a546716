//! Rendering of field constants as Backlang literals.

use crate::{
    language::{
        config::ProjectionOptions,
        style::{style_for, StyleCategory},
    },
    metadata::constant::ConstantValue,
    output::TextOutput,
};

/// A rendered literal and the lexical category it is styled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// The literal text
    pub text: String,
    /// The style category, `None` for unstyled literals
    pub category: Option<StyleCategory>,
}

/// Render a constant value as a literal.
///
/// Strings are double-quoted with embedded `"` escaped, characters single-quoted and booleans
/// spelled as keywords. Numbers and other values use their default decimal text and carry no
/// style.
///
/// # Examples
///
/// ```rust
/// use backscope::{
///     language::{literal::format_literal, style::StyleCategory},
///     metadata::constant::ConstantValue,
///     ProjectionOptions,
/// };
///
/// let options = ProjectionOptions::default();
/// let literal = format_literal(&ConstantValue::Boolean(true), &options);
///
/// assert_eq!(literal.text, "true");
/// assert_eq!(literal.category, Some(StyleCategory::Keyword));
/// ```
#[must_use]
pub fn format_literal(value: &ConstantValue, options: &ProjectionOptions) -> Literal {
    match value {
        ConstantValue::String(text) => Literal {
            text: format!("\"{}\"", text.replace('"', "\\\"")),
            category: Some(StyleCategory::String),
        },
        ConstantValue::Char(character) => {
            let text = if options.escape_char_literals {
                format!("'{}'", escape_char(*character))
            } else {
                format!("'{character}'")
            };

            Literal {
                text,
                category: Some(StyleCategory::String),
            }
        }
        ConstantValue::Boolean(flag) => Literal {
            text: flag.to_string(),
            category: Some(StyleCategory::Keyword),
        },
        ConstantValue::Integer(number) => unstyled(number.to_string()),
        ConstantValue::Unsigned(number) => unstyled(number.to_string()),
        ConstantValue::Single(number) => unstyled(number.to_string()),
        ConstantValue::Float(number) => unstyled(number.to_string()),
        ConstantValue::Other(text) => unstyled(text.clone()),
    }
}

/// Write a constant value as a literal, wrapped in a span of its style when it has one
pub fn write_literal(
    output: &mut dyn TextOutput,
    value: &ConstantValue,
    options: &ProjectionOptions,
) {
    let literal = format_literal(value, options);

    match literal.category {
        Some(category) => {
            output.begin_span(style_for(category));
            output.write(&literal.text);
            output.end_span();
        }
        None => output.write(&literal.text),
    }
}

fn unstyled(text: String) -> Literal {
    Literal {
        text,
        category: None,
    }
}

fn escape_char(character: char) -> String {
    match character {
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\0' => "\\0".to_string(),
        c if c.is_control() => format!("\\u{{{:04x}}}", u32::from(c)),
        c => c.to_string(),
    }
}
