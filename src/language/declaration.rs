//! Type declaration formatter.
//!
//! A type is projected as an optional module header, a header line, a field block and an
//! `implement` block holding its methods:
//!
//! ```text
//! module Geometry;
//!
//! public sealed class Point: IEquatable {
//!
//!     let x: i32;
//! }
//!
//! implement Point {
//!     public constructor() {
//!     }
//!
//!
//! }
//! ```
//!
//! The free-function container has no header line and no blocks; its members are written
//! directly, without indentation.

use crate::{
    language::{
        config::ProjectionOptions,
        members::{
            write_accessibility, write_field, write_keyword, write_method, write_type_reference,
        },
    },
    metadata::{
        declarations::{TypeDeclaration, TypeModifiers},
        typesystem::TypeRef,
    },
    output::{Reference, TextOutput},
};

/// Type modifier keywords, in emission order
const TYPE_MODIFIER_KEYWORDS: [(TypeModifiers, &str); 3] = [
    (TypeModifiers::SEALED, "sealed"),
    (TypeModifiers::STATIC, "static"),
    (TypeModifiers::ABSTRACT, "abstract"),
];

/// Returns `true` if the declaration is the synthetic container of free functions, either by
/// its flag or by the container name configured in `options`
#[must_use]
pub fn is_free_function_container(
    declaration: &TypeDeclaration,
    options: &ProjectionOptions,
) -> bool {
    declaration.free_functions || options.is_free_function_container_name(&declaration.name)
}

/// The base types shown in the header line.
///
/// Drops the implicit `System.Object`, `System.Enum` and `System.ValueType` bases and the type
/// itself, keeping the order of the remaining entries.
///
/// # Examples
///
/// ```rust
/// use backscope::{
///     language::declaration::visible_base_types,
///     metadata::{builders::TypeBuilder, typesystem::TypeRef},
/// };
///
/// let point = TypeBuilder::new("Point")
///     .namespace("Geometry")
///     .base(TypeRef::system("ValueType"))
///     .base(TypeRef::system("IEquatable"))
///     .build();
///
/// let bases: Vec<_> = visible_base_types(&point).map(|base| base.name.as_str()).collect();
/// assert_eq!(bases, ["IEquatable"]);
/// ```
pub fn visible_base_types(declaration: &TypeDeclaration) -> impl Iterator<Item = &TypeRef> {
    let full_name = declaration.full_name();
    declaration
        .base_types
        .iter()
        .filter(move |base| !base.is_synthesized_base() && base.full_name != full_name)
}

/// Write one type declaration with all of its members.
///
/// # Examples
///
/// ```rust
/// use backscope::{
///     language::declaration::write_type,
///     metadata::builders::TypeBuilder,
///     output::PlainTextOutput,
///     ProjectionOptions,
/// };
///
/// let empty = TypeBuilder::new("Empty").internal().build();
/// let mut output = PlainTextOutput::new();
/// write_type(&mut output, &empty, &ProjectionOptions::default());
///
/// assert_eq!(output.text(), "internal class Empty {\n\n}\n\nimplement Empty {\n}\n");
/// assert!(output.is_balanced());
/// ```
pub fn write_type(
    output: &mut dyn TextOutput,
    declaration: &TypeDeclaration,
    options: &ProjectionOptions,
) {
    log::debug!(
        "Projecting type '{}' ({} fields, {} methods)",
        declaration.full_name(),
        declaration.fields.len(),
        declaration.methods.len()
    );

    if !declaration.namespace.is_empty() {
        write_keyword(output, "module");
        output.write(&declaration.namespace);
        output.write(";");
        output.write_line();
        output.write_line();
    }

    if is_free_function_container(declaration, options) {
        for field in &declaration.fields {
            write_field(output, field, options);
        }
        for method in &declaration.methods {
            write_method(output, method, options);
        }
        return;
    }

    write_header(output, declaration);

    output.write(" ");
    output.mark_fold_start();
    output.write("{");
    output.write_line();
    output.indent();
    output.write_line();

    for field in &declaration.fields {
        write_field(output, field, options);
    }

    output.unindent();
    output.write("}");
    output.write_line();
    output.mark_fold_end();
    output.write_line();

    output.mark_fold_start();
    write_keyword(output, "implement");
    output.write_reference(Reference::Definition(declaration), &declaration.name, false);
    output.write(" {");
    output.write_line();
    output.indent();

    for method in &declaration.methods {
        write_method(output, method, options);
    }

    output.unindent();
    output.write("}");
    output.write_line();
    output.mark_fold_end();
}

/// Accessibility, modifiers, kind keyword, the defining name and the base type list
fn write_header(output: &mut dyn TextOutput, declaration: &TypeDeclaration) {
    write_accessibility(output, declaration.accessibility);
    for (modifier, keyword) in TYPE_MODIFIER_KEYWORDS {
        if declaration.modifiers.contains(modifier) {
            write_keyword(output, keyword);
        }
    }

    write_keyword(output, declaration.kind.keyword());
    output.write_reference(Reference::Definition(declaration), &declaration.name, true);

    for (index, base) in visible_base_types(declaration).enumerate() {
        output.write(if index == 0 { ": " } else { ", " });
        write_type_reference(output, base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            builders::{FieldBuilder, MethodBuilder, TypeBuilder},
            typesystem::TypeKind,
        },
        output::{OutputEvent, PlainTextOutput, RecordingOutput},
    };

    fn render(declaration: &TypeDeclaration) -> String {
        let mut output = PlainTextOutput::new();
        write_type(&mut output, declaration, &ProjectionOptions::default());
        assert!(output.is_balanced());
        output.into_text()
    }

    #[test]
    fn header_keywords() {
        let declaration = TypeBuilder::new("Shape")
            .public()
            .abstract_type()
            .sealed()
            .kind(TypeKind::Struct)
            .build();
        let text = render(&declaration);

        assert!(text.starts_with("public sealed abstract struct Shape {\n"));
    }

    #[test]
    fn kind_keywords() {
        for (kind, keyword) in [
            (TypeKind::Interface, "interface"),
            (TypeKind::Enum, "enum"),
            (TypeKind::Delegate, "class"),
        ] {
            let text = render(&TypeBuilder::new("T").kind(kind).build());
            assert!(text.starts_with(&format!("{keyword} T {{")), "{text}");
        }
    }

    #[test]
    fn base_type_filtering() {
        let declaration = TypeBuilder::new("Color")
            .namespace("Paint")
            .base(TypeRef::system("Object"))
            .base(TypeRef::system("IComparable"))
            .base(TypeRef::system("ValueType"))
            .base(TypeRef::new("Paint", "Color"))
            .base(TypeRef::system("Enum"))
            .base(TypeRef::system("IFormattable"))
            .build();

        let bases: Vec<_> = visible_base_types(&declaration)
            .map(|base| base.full_name.as_str())
            .collect();
        assert_eq!(bases, ["System.IComparable", "System.IFormattable"]);

        let text = render(&declaration);
        assert!(text.contains("class Color: IComparable, IFormattable {\n"));
    }

    #[test]
    fn no_colon_without_bases() {
        let declaration = TypeBuilder::new("Plain")
            .base(TypeRef::system("Object"))
            .build();
        assert!(render(&declaration).starts_with("class Plain {\n"));
    }

    #[test]
    fn module_header() {
        let declaration = TypeBuilder::new("Point").namespace("Geometry").build();
        assert!(render(&declaration).starts_with("module Geometry;\n\nclass Point {"));

        let global = TypeBuilder::new("Point").build();
        assert!(render(&global).starts_with("class Point {"));
    }

    #[test]
    fn blocks() {
        let declaration = TypeBuilder::new("Counter")
            .public()
            .field(FieldBuilder::new("value", TypeRef::system("Int32")).private().build())
            .method(
                MethodBuilder::new("Next")
                    .public()
                    .returns(TypeRef::system("Int32"))
                    .build(),
            )
            .build();

        assert_eq!(
            render(&declaration),
            "public class Counter {\n\
             \n    private let mut value: i32;\n\
             }\n\
             \n\
             implement Counter {\n    public func Next() -> i32;\n\
             }\n"
        );
    }

    #[test]
    fn implement_uses_reference() {
        let declaration = TypeBuilder::new("Point").namespace("Geometry").build();
        let mut output = RecordingOutput::new();
        write_type(&mut output, &declaration, &ProjectionOptions::default());

        let reference = |is_definition| OutputEvent::Reference {
            target: "Geometry.Point".to_string(),
            text: "Point".to_string(),
            is_definition,
        };
        assert_eq!(output.count(&reference(true)), 1);
        assert_eq!(output.count(&reference(false)), 1);
    }

    #[test]
    fn free_function_container() {
        let declaration = TypeBuilder::new("FreeFunctions")
            .namespace("App")
            .field(FieldBuilder::new("counter", TypeRef::system("Int32")).build())
            .method(MethodBuilder::new("Run").public().static_method().build())
            .build();

        assert_eq!(
            render(&declaration),
            "module App;\n\nlet mut counter: i32;\npublic static func Run();\n"
        );
    }

    #[test]
    fn container_by_flag_or_name() {
        let options = ProjectionOptions::default();
        let by_flag = TypeBuilder::new("Globals").free_functions(true).build();
        let by_name = TypeBuilder::new("FreeFunctions").free_functions(false).build();
        let plain = TypeBuilder::new("Globals").build();

        assert!(is_free_function_container(&by_flag, &options));
        assert!(is_free_function_container(&by_name, &options));
        assert!(!is_free_function_container(&plain, &options));

        let flag_only = ProjectionOptions::new().with_free_function_container(None);
        assert!(!is_free_function_container(&by_name, &flag_only));
        assert!(is_free_function_container(&by_flag, &flag_only));
    }
}
