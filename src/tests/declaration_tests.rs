use super::{render_at, render_str};
use crate::*;

fn string_type() -> Type {
    Type::declared("String")
}

#[test]
fn test_minimal_class() {
    assert_eq!(render_str(&Class::new("Foo")), "class Foo");
}

#[test]
fn test_class_header() {
    let mut class = Class::new("Foo");
    class.docs = Some("A foo.".to_string());
    class.annotations.push(Annotation::new("Bar"));
    class.modifiers.push(Modifier::Open);
    class.type_parameters.push(TypeParameter::new("T"));
    class.extends = Some(Type::generic("Base", vec![Type::declared("T")]));

    assert_eq!(render_str(&class), "/// A foo.\n@Bar\nopen class Foo<T> extends Base<T>");
}

#[test]
fn test_class_members_separated_by_blank_line() {
    let mut signature = MethodSignature::new("baz");
    signature.result = Some(Type::declared("Int"));
    let mut method = ClassMethod::new(signature);
    method.implementation = Some(Expression::Int(42));

    let mut class = Class::new("Foo");
    class.members = vec![
        ClassMember::Property(ClassProperty::typed("bar", string_type())),
        ClassMember::Method(method),
    ];

    assert_eq!(
        render_str(&class),
        "class Foo {\n  bar: String\n\n  function baz(): Int = 42\n}"
    );
}

#[test]
fn test_class_nested_body_indentation() {
    let mut class = Class::new("Foo");
    class.members = vec![
        ClassMember::Property(ClassProperty::amending(
            "settings",
            ObjectBody::new(vec![ObjectMember::Property(ObjectProperty::value(
                "a",
                Expression::Int(1),
            ))]),
        )),
        ClassMember::Property(ClassProperty::typed("name", string_type())),
    ];

    assert_eq!(
        render_str(&class),
        "class Foo {\n  settings {\n    a = 1\n  }\n\n  name: String\n}"
    );
}

#[test]
fn test_member_preamble_indented_inside_class() {
    let mut property = ClassProperty::typed("foo", string_type());
    property.docs = Some("Line one\nLine two".to_string());
    property.annotations.push(Annotation::new("Ann"));

    let mut class = Class::new("Foo");
    class.members.push(ClassMember::Property(property));

    assert_eq!(
        render_str(&class),
        "class Foo {\n  /// Line one\n  /// Line two\n  @Ann\n  foo: String\n}"
    );
}

#[test]
fn test_class_property_optional_fields_are_independent() {
    let core = "foo: String";
    let docs = "/// Docs";
    let annotation = "@Ann";
    let modifier = "hidden ";

    let build = |with_docs: bool, with_annotation: bool, with_modifier: bool| {
        let mut property = ClassProperty::typed("foo", string_type());
        if with_docs {
            property.docs = Some("Docs".to_string());
        }
        if with_annotation {
            property.annotations.push(Annotation::new("Ann"));
        }
        if with_modifier {
            property.modifiers.push(Modifier::Hidden);
        }
        render_str(&property)
    };

    for with_docs in [false, true] {
        for with_annotation in [false, true] {
            for with_modifier in [false, true] {
                let mut expected = String::new();
                if with_docs {
                    expected.push_str(docs);
                    expected.push('\n');
                }
                if with_annotation {
                    expected.push_str(annotation);
                    expected.push('\n');
                }
                if with_modifier {
                    expected.push_str(modifier);
                }
                expected.push_str(core);

                assert_eq!(
                    build(with_docs, with_annotation, with_modifier),
                    expected,
                    "docs={} annotation={} modifier={}",
                    with_docs,
                    with_annotation,
                    with_modifier
                );
            }
        }
    }
}

#[test]
fn test_class_property_forms() {
    assert_eq!(
        render_str(&ClassProperty::assigned("foo", Expression::Int(1))),
        "foo = 1"
    );

    let mut typed_value = ClassProperty::typed("foo", Type::declared("Int"));
    typed_value.expression = Some(Expression::Int(1));
    assert_eq!(render_str(&typed_value), "foo: Int = 1");

    let amending = ClassProperty::amending(
        "foo",
        ObjectBody::new(vec![ObjectMember::Element(Expression::Int(1))]),
    );
    assert_eq!(render_str(&amending), "foo {\n  1\n}");
    assert_eq!(render_at(&amending, 1), "foo {\n    1\n  }");
}

#[test]
fn test_class_property_rejects_invalid_shapes() {
    let context = RenderContext::new();

    let mut typed_body = ClassProperty::typed("foo", string_type());
    typed_body.body = Some(ObjectBody::default());
    let err = typed_body.render(&context).unwrap_err();
    assert!(err.to_string().contains("`foo`"));

    let mut assigned_body = ClassProperty::assigned("foo", Expression::Int(1));
    assigned_body.body = Some(ObjectBody::default());
    assert!(assigned_body.render(&context).is_err());

    let mut empty = ClassProperty::typed("foo", string_type());
    empty.ty = None;
    assert!(empty.render(&context).is_err());
}

#[test]
fn test_method_signature() {
    assert_eq!(render_str(&MethodSignature::new("foo")), "function foo()");

    let mut signature = MethodSignature::new("foo");
    signature.modifiers.push(Modifier::Local);
    signature.type_parameters.push(TypeParameter::new("T"));
    signature.parameters = vec![
        Parameter::typed("x", Type::declared("T")),
        Parameter::new("y"),
    ];
    signature.result = Some(Type::declared("T"));
    assert_eq!(render_str(&signature), "local function foo<T>(x: T, y): T");
}

#[test]
fn test_class_method() {
    let mut signature = MethodSignature::new("double");
    signature.parameters.push(Parameter::typed("x", Type::declared("Int")));
    signature.result = Some(Type::declared("Int"));

    let mut method = ClassMethod::new(signature);
    method.docs = Some("Doubles.".to_string());
    method.annotations.push(Annotation::new("Pure"));
    method.implementation = Some(Expression::binary(
        BinaryOperator::Multiply,
        Expression::name("x"),
        Expression::Int(2),
    ));
    assert_eq!(
        render_str(&method),
        "/// Doubles.\n@Pure\nfunction double(x: Int): Int = x * 2"
    );

    let mut abstract_signature = MethodSignature::new("size");
    abstract_signature.modifiers.push(Modifier::Abstract);
    abstract_signature.result = Some(Type::declared("Int"));
    assert_eq!(
        render_str(&ClassMethod::new(abstract_signature)),
        "abstract function size(): Int"
    );
}

#[test]
fn test_type_alias() {
    assert_eq!(
        render_str(&TypeAlias::new("Name", string_type())),
        "typealias Name = String"
    );

    let mut alias = TypeAlias::new("HelloWorld", Type::StringLiteral("helloworld".to_string()));
    alias.docs = Some("This is a Hello World.\n\nMore docs here.".to_string());
    alias.annotations = vec![Annotation::new("Foo"), Annotation::new("Bar")];
    alias.modifiers = vec![Modifier::Local, Modifier::Const];
    alias.parameters.push(TypeParameter::new("T"));

    assert_eq!(
        render_str(&alias),
        "/// This is a Hello World.\n///\n/// More docs here.\n@Foo\n@Bar\nlocal const typealias HelloWorld<T> = \"helloworld\""
    );
}

#[test]
fn test_import_clause() {
    assert_eq!(render_str(&ImportClause::new("foo.pkl")), "import \"foo.pkl\"");

    let aliased = ImportClause {
        path: "package://example.com/lib@1.0.0#/Lib.pkl".to_string(),
        alias: Some("lib".to_string()),
        glob: false,
    };
    assert_eq!(
        render_str(&aliased),
        "import \"package://example.com/lib@1.0.0#/Lib.pkl\" as lib"
    );

    let glob = ImportClause {
        path: "*.pkl".to_string(),
        alias: Some("all".to_string()),
        glob: true,
    };
    assert_eq!(render_str(&glob), "import* \"*.pkl\" as all");
}
