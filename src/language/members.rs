//! Field and method formatters.
//!
//! Both formatters emit exactly one declaration and end it with a line break. Neither fails:
//! a method body that cannot be decoded is logged and its block is still closed, so the fold and
//! indentation bookkeeping of the sink stays balanced.

use crate::{
    disassembler::decode_opcodes,
    language::{
        config::ProjectionOptions,
        literal::write_literal,
        style::{display_type_name, KEYWORD_STYLE, TYPE_STYLE},
    },
    metadata::{
        body::MethodBody,
        declarations::{FieldDeclaration, MethodDeclaration, MethodModifiers},
        typesystem::{Accessibility, TypeRef},
    },
    output::{Reference, TextOutput},
};

/// Method modifier keywords, in emission order
const METHOD_MODIFIER_KEYWORDS: [(MethodModifiers, &str); 4] = [
    (MethodModifiers::ABSTRACT, "abstract"),
    (MethodModifiers::STATIC, "static"),
    (MethodModifiers::OVERRIDE, "override"),
    (MethodModifiers::OPERATOR, "operator"),
];

/// Write a keyword and its trailing space in keyword style
pub(crate) fn write_keyword(output: &mut dyn TextOutput, keyword: &str) {
    output.begin_span(KEYWORD_STYLE);
    output.write(keyword);
    output.write(" ");
    output.end_span();
}

/// Write the accessibility keyword, if the level has one
pub(crate) fn write_accessibility(output: &mut dyn TextOutput, accessibility: Accessibility) {
    if let Some(keyword) = accessibility.keyword() {
        write_keyword(output, keyword);
    }
}

/// Write a type reference under its display name in type style
pub(crate) fn write_type_reference(output: &mut dyn TextOutput, type_ref: &TypeRef) {
    output.begin_span(TYPE_STYLE);
    output.write_reference(Reference::Type(type_ref), display_type_name(type_ref), false);
    output.end_span();
}

/// Write one field declaration: `[access ]let [mut ]name: type[ = literal];`
///
/// # Examples
///
/// ```rust
/// use backscope::{
///     language::members::write_field,
///     metadata::{builders::FieldBuilder, typesystem::TypeRef},
///     output::RecordingOutput,
///     ProjectionOptions,
/// };
///
/// let field = FieldBuilder::new("count", TypeRef::system("Int32")).private().build();
/// let mut output = RecordingOutput::new();
/// write_field(&mut output, &field, &ProjectionOptions::default());
///
/// assert_eq!(output.text(), "private let mut count: i32;\n");
/// ```
pub fn write_field(
    output: &mut dyn TextOutput,
    field: &FieldDeclaration,
    options: &ProjectionOptions,
) {
    write_accessibility(output, field.accessibility);
    write_keyword(output, "let");
    if !field.read_only {
        write_keyword(output, "mut");
    }

    output.write_reference(Reference::Field(field), &field.name, true);
    output.write(": ");
    write_type_reference(output, &field.field_type);

    if let Some(constant) = &field.constant {
        output.write(" = ");
        write_literal(output, constant, options);
    }

    output.write(";");
    output.write_line();
}

/// Write one method declaration.
///
/// The signature is followed by a body block for methods with a body and by `;` otherwise.
/// The fold region of a body block opens at the closing parenthesis of the parameter list.
///
/// # Examples
///
/// ```rust
/// use backscope::{
///     language::members::write_method,
///     metadata::{builders::MethodBuilder, typesystem::TypeRef},
///     output::RecordingOutput,
///     ProjectionOptions,
/// };
///
/// let method = MethodBuilder::new("Scale")
///     .public()
///     .abstract_method()
///     .parameter("factor", TypeRef::system("Double"))
///     .build();
/// let mut output = RecordingOutput::new();
/// write_method(&mut output, &method, &ProjectionOptions::default());
///
/// assert_eq!(output.text(), "public abstract func Scale(factor: f64);\n");
/// ```
pub fn write_method(
    output: &mut dyn TextOutput,
    method: &MethodDeclaration,
    options: &ProjectionOptions,
) {
    write_accessibility(output, method.accessibility);
    for (modifier, keyword) in METHOD_MODIFIER_KEYWORDS {
        if method.modifiers.contains(modifier) {
            write_keyword(output, keyword);
        }
    }

    if method.is_constructor {
        output.begin_span(KEYWORD_STYLE);
        output.write_reference(Reference::Method(method), "constructor", true);
        output.end_span();
    } else {
        write_keyword(output, "func");
        output.write_reference(Reference::Method(method), &method.name, true);
    }

    output.write("(");
    for (index, parameter) in method.parameters.iter().enumerate() {
        if index > 0 {
            output.write(", ");
        }

        output.write(&parameter.name);
        output.write(": ");
        write_type_reference(output, &parameter.parameter_type);
    }

    if method.has_body() {
        output.mark_fold_start();
    }
    output.write(")");

    if !method.return_type.is_void() {
        output.write(" -> ");
        write_type_reference(output, &method.return_type);
    }

    match &method.body {
        Some(body) => {
            output.write(" {");
            output.write_line();
            output.indent();

            if options.decode_bodies {
                decode_body(method, body);
            }

            output.unindent();
            output.write("}");
            output.write_line();
            output.mark_fold_end();
            output.write_line();
        }
        None => output.write(";"),
    }

    output.write_line();
}

/// Walk the opcode stream of a body.
///
/// Opcodes are not lowered to text yet; a truncated stream ends the walk.
fn decode_body(method: &MethodDeclaration, body: &MethodBody) {
    let mut decoded = 0usize;

    for result in decode_opcodes(&body.code) {
        match result {
            Ok(_opcode) => decoded += 1,
            Err(error) => {
                log::warn!(
                    "Abandoning body of '{}' after {} opcodes: {}",
                    method.name,
                    decoded,
                    error
                );
                return;
            }
        }
    }

    log::trace!("Decoded {} opcodes in '{}'", decoded, method.name);
}
