//! Integration tests for projecting complete declarations into Backlang.
//!
//! The declarations are either assembled with the builders or mapped from raw metadata words,
//! constant blobs and method headers, the way a host hands them over after reading an assembly.

use backscope::{
    language::style::{alias_for, PrimitiveAlias},
    metadata::{
        declarations::{
            TypeModifiers, METHOD_ABSTRACT, METHOD_NEW_SLOT, METHOD_STATIC, METHOD_VIRTUAL,
        },
        typesystem::ELEMENT_TYPE,
    },
    prelude::*,
};
use strum::IntoEnumIterator;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn project(declaration: &TypeDeclaration) -> RecordingOutput {
    let mut output = RecordingOutput::new();
    Backlang::default().decompile_type(declaration, &mut output);
    output
}

fn render(declaration: &TypeDeclaration) -> PlainTextOutput {
    let mut output = PlainTextOutput::new();
    Backlang::default().decompile_type(declaration, &mut output);
    output
}

/// A sealed public `Point` with a read-only field and a constructor that has a body.
#[test]
fn test_point_type() {
    init_logging();

    let point = TypeBuilder::new("Point")
        .namespace("Geometry")
        .public()
        .sealed()
        .field(FieldBuilder::new("x", TypeRef::system("Int32")).read_only().build())
        .method(MethodBuilder::constructor().public().code(vec![0x00, 0x2A]).build())
        .build();

    let output = render(&point);
    let text = output.text();

    assert!(text.starts_with("module Geometry;\n\n"));
    assert!(text.contains("public sealed class Point {\n"));
    assert!(text.contains("\n    let x: i32;\n}\n"));
    assert!(text.contains("implement Point {\n    public constructor() {\n    }\n"));
    assert!(text.ends_with("}\n"));

    assert!(output.is_balanced());
    assert_eq!(output.folds().len(), 3);
    assert_eq!(output.definitions().count(), 3);
}

/// The free-function container writes its members without header line or blocks.
#[test]
fn test_free_functions() {
    let container = TypeBuilder::new("FreeFunctions")
        .method(MethodBuilder::new("Start").public().static_method().build())
        .method(
            MethodBuilder::new("Stop")
                .public()
                .static_method()
                .parameter("code", TypeRef::system("Int32"))
                .build(),
        )
        .build();

    let output = project(&container);

    assert_eq!(
        output.text(),
        "public static func Start();\npublic static func Stop(code: i32);\n"
    );
    assert_eq!(output.count(&OutputEvent::FoldStart), 0);
    assert_eq!(output.count(&OutputEvent::Indent), 0);
    assert!(output.is_balanced());
}

/// Boolean constants are keywords, not strings.
#[test]
fn test_boolean_constant_style() {
    let flags = TypeBuilder::new("Flags")
        .field(
            FieldBuilder::new("Enabled", TypeRef::system("Boolean"))
                .public()
                .constant(true)
                .build(),
        )
        .build();

    let output = project(&flags);
    let tokens = output.styled_tokens();

    assert!(output.text().contains("public let Enabled: bool = true;\n"));
    assert!(tokens.contains(&(Some(KEYWORD_STYLE), "true".to_string())));
    assert!(!tokens.contains(&(Some(STRING_STYLE), "true".to_string())));
}

/// Single precision constants read from a blob keep their short decimal form.
#[test]
fn test_single_precision_constant() -> backscope::Result<()> {
    let ratio = FieldBuilder::new("Ratio", TypeRef::system("Single"))
        .constant(ConstantValue::from_blob(ELEMENT_TYPE::R4, &0.1f32.to_le_bytes())?)
        .build();

    let mut output = RecordingOutput::new();
    Backlang::default().decompile_field(&ratio, &mut output);

    assert_eq!(output.text(), "let Ratio: f32 = 0.1;\n");
    Ok(())
}

/// A body that ends after the `0xFE` lead byte still gets a closed block.
#[test]
fn test_truncated_body() {
    init_logging();

    let body = [0x00, 0x00, 0xFE];
    let results: Vec<_> = decode_opcodes(&body).collect();
    assert_eq!(results.len(), 3);
    assert!(matches!(results[2], Err(Error::MalformedBody { offset: 2 })));

    let broken = TypeBuilder::new("Broken")
        .method(MethodBuilder::new("Run").public().code(body.to_vec()).build())
        .build();
    let output = render(&broken);

    assert!(output
        .text()
        .contains("implement Broken {\n    public func Run() {\n    }\n"));
    assert!(output.is_balanced());
    assert!(project(&broken).is_balanced());
}

/// Every branch of the formatters leaves spans, indentation and folds balanced.
#[test]
fn test_balance_across_branches() {
    init_logging();

    let declarations = [
        TypeBuilder::new("FreeFunctions")
            .method(MethodBuilder::new("Main").code(vec![0x2A]).build())
            .build(),
        TypeBuilder::new("Shape")
            .abstract_type()
            .method(MethodBuilder::new("Area").abstract_method().build())
            .build(),
        TypeBuilder::new("Decoder")
            .method(MethodBuilder::new("Good").code(vec![0xFE, 0x01, 0x2A]).build())
            .method(MethodBuilder::new("Bad").code(vec![0xFE]).build())
            .method(MethodBuilder::new("Empty").code(Vec::<u8>::new()).build())
            .build(),
    ];

    for declaration in &declarations {
        let output = project(declaration);
        assert!(output.is_balanced(), "{}", declaration.name);
        assert_eq!(
            output.count(&OutputEvent::FoldStart),
            output.count(&OutputEvent::FoldEnd)
        );
        assert_eq!(
            output.count(&OutputEvent::Indent),
            output.count(&OutputEvent::Unindent)
        );

        let plain = render(declaration);
        assert!(plain.is_balanced());
        assert_eq!(plain.indentation_level(), 0);
    }
}

/// Primitive types are shown with their alias, everything else with its simple name.
#[test]
fn test_type_aliases() {
    for primitive in PrimitiveAlias::iter() {
        let field = FieldBuilder::new("value", TypeRef::system(primitive.type_name())).build();
        let mut output = RecordingOutput::new();
        Backlang::default().decompile_field(&field, &mut output);

        assert_eq!(
            output.text(),
            format!("let mut value: {};\n", primitive.alias())
        );
    }

    assert_eq!(alias_for("Decimal"), None);
    let field = FieldBuilder::new("amount", TypeRef::system("Decimal")).build();
    let mut output = RecordingOutput::new();
    Backlang::default().decompile_field(&field, &mut output);
    assert_eq!(output.text(), "let mut amount: Decimal;\n");
}

/// Implicit bases and self references never reach the header line.
#[test]
fn test_base_type_filtering() {
    let color = TypeBuilder::new("Color")
        .namespace("Paint")
        .kind(TypeKind::Enum)
        .base(TypeRef::system("Enum"))
        .base(TypeRef::system("Object"))
        .base(TypeRef::new("Paint", "Color"))
        .base(TypeRef::system("ValueType"))
        .build();
    assert!(project(&color).text().contains("enum Color {\n"));

    let list = TypeBuilder::new("List")
        .base(TypeRef::system("Object"))
        .base(TypeRef::new("Collections", "IList"))
        .base(TypeRef::new("Collections", "IEnumerable"))
        .build();
    let output = project(&list);

    assert!(output.text().contains("class List: IList, IEnumerable {\n"));
    assert_eq!(
        output.count(&OutputEvent::Reference {
            target: "Collections.IList".to_string(),
            text: "IList".to_string(),
            is_definition: false,
        }),
        1
    );
}

/// Declarations mapped from raw metadata project the same as built ones.
#[test]
fn test_declarations_from_raw_metadata() -> backscope::Result<()> {
    // public abstract sealed class Math
    let type_flags = 0x0000_0181;
    // public static double Abs(double)
    let method_flags = 0x0016;
    // public newslot virtual abstract string Describe()
    let abstract_flags = 0x0006 | METHOD_VIRTUAL | METHOD_NEW_SLOT | METHOD_ABSTRACT;
    // public const double Pi
    let field_flags = 0x0056;

    assert_ne!(method_flags & METHOD_STATIC, 0);

    let pi = FieldDeclaration {
        name: "Pi".to_string(),
        field_type: TypeRef::system("Double"),
        accessibility: Accessibility::from_field_flags(field_flags),
        read_only: true,
        constant: Some(ConstantValue::from_blob(
            ELEMENT_TYPE::R8,
            &2.5f64.to_le_bytes(),
        )?),
    };

    let abs = MethodDeclaration {
        name: "Abs".to_string(),
        accessibility: Accessibility::from_method_flags(method_flags),
        modifiers: MethodModifiers::from_method_flags(method_flags, "Abs"),
        is_constructor: false,
        parameters: vec![ParameterDeclaration::new("value", TypeRef::system("Double"))],
        return_type: TypeRef::system("Double"),
        // Tiny header, 3 code bytes: nop; nop; ret
        body: Some(MethodBody::parse(&[0x0E, 0x00, 0x00, 0x2A])?),
    };

    let describe = MethodDeclaration {
        name: "Describe".to_string(),
        accessibility: Accessibility::from_method_flags(abstract_flags),
        modifiers: MethodModifiers::from_method_flags(abstract_flags, "Describe"),
        is_constructor: false,
        parameters: Vec::new(),
        return_type: TypeRef::system("String"),
        body: None,
    };

    let math = TypeDeclaration {
        name: "Math".to_string(),
        namespace: "System".to_string(),
        kind: TypeKind::classify(type_flags, Some("System.Object")),
        accessibility: Accessibility::from_type_flags(type_flags),
        modifiers: TypeModifiers::from_type_flags(type_flags),
        base_types: vec![TypeRef::system("Object")],
        fields: vec![pi],
        methods: vec![abs, describe],
        free_functions: false,
    };

    let output = render(&math);
    let text = output.text();

    assert!(text.starts_with("module System;\n\npublic static class Math {\n"));
    assert!(text.contains("    public let Pi: f64 = 2.5;\n"));
    assert!(text.contains("    public static func Abs(value: f64) -> f64 {\n    }\n"));
    assert!(text.contains("    public abstract func Describe() -> string;\n"));
    assert!(output.is_balanced());

    Ok(())
}

/// Batches are projected in parallel and keep their input order.
#[test]
fn test_parallel_batch() {
    let types: Vec<_> = ["Alpha", "Beta", "Gamma", "Delta"]
        .iter()
        .map(|name| {
            TypeBuilder::new(name)
                .namespace("Batch")
                .public()
                .method(MethodBuilder::new("Run").code(vec![0x00, 0x2A]).build())
                .build()
        })
        .collect();

    let texts = Backlang::default().decompile_types(&types);

    assert_eq!(texts.len(), 4);
    for (declaration, text) in types.iter().zip(&texts) {
        assert!(text.contains(&format!("public class {} {{\n", declaration.name)));
    }
}
