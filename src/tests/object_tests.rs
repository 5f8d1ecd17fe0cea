use super::{render_at, render_str};
use crate::*;

fn property(name: &str, value: Expression) -> ObjectMember {
    ObjectMember::Property(ObjectProperty::value(name, value))
}

#[test]
fn test_empty_body() {
    assert_eq!(render_str(&ObjectBody::default()), "{}");
    assert_eq!(render_at(&ObjectBody::default(), 3), "{}");
}

#[test]
fn test_body_with_members() {
    let body = ObjectBody::new(vec![
        property("foo", Expression::string("bar")),
        property("baz", Expression::Int(42)),
    ]);
    assert_eq!(render_str(&body), "{\n  foo = \"bar\"\n  baz = 42\n}");
    assert_eq!(render_at(&body, 1), "{\n    foo = \"bar\"\n    baz = 42\n  }");
}

#[test]
fn test_body_parameters() {
    let params_only = ObjectBody {
        parameters: vec![
            Parameter::typed("foo", Type::declared("String")),
            Parameter::typed("bar", Type::declared("Int")),
        ],
        members: vec![],
    };
    assert_eq!(render_str(&params_only), "{ foo: String, bar: Int ->}");

    let with_members = ObjectBody {
        parameters: vec![Parameter::new("x")],
        members: vec![property("value", Expression::name("x"))],
    };
    assert_eq!(render_str(&with_members), "{ x ->\n  value = x\n}");
}

#[test]
fn test_nested_bodies_indent_and_reset() {
    let body = ObjectBody::new(vec![
        ObjectMember::Property(ObjectProperty::amending(
            "server",
            ObjectBody::new(vec![
                property("host", Expression::string("localhost")),
                ObjectMember::Property(ObjectProperty::amending(
                    "tls",
                    ObjectBody::new(vec![property(
                        "enabled",
                        Expression::Builtin(BuiltinExpression::True),
                    )]),
                )),
            ]),
        )),
        property("port", Expression::Int(8080)),
    ]);

    assert_eq!(
        render_str(&body),
        "{\n  server {\n    host = \"localhost\"\n    tls {\n      enabled = true\n    }\n  }\n  port = 8080\n}"
    );
}

#[test]
fn test_object_property_forms() {
    let typed_value = ObjectProperty {
        modifiers: vec![Modifier::Local],
        name: Identifier::new("foo"),
        ty: Some(Type::declared("Int")),
        value: Some(Expression::Int(1)),
        bodies: vec![],
    };
    assert_eq!(render_str(&typed_value), "local foo: Int = 1");

    let multi_body = ObjectProperty {
        modifiers: vec![],
        name: Identifier::new("foo"),
        ty: None,
        value: None,
        bodies: vec![
            ObjectBody::new(vec![property("a", Expression::Int(1))]),
            ObjectBody::new(vec![property("b", Expression::Int(2))]),
        ],
    };
    assert_eq!(render_str(&multi_body), "foo {\n  a = 1\n} {\n  b = 2\n}");
}

#[test]
fn test_object_property_rejects_invalid_shapes() {
    let context = RenderContext::new();

    let mut mixed = ObjectProperty::amending("foo", ObjectBody::default());
    mixed.value = Some(Expression::Int(1));
    let err = mixed.render(&context).unwrap_err();
    assert!(err.to_string().contains("foo"));

    let mut typed_body = ObjectProperty::amending("foo", ObjectBody::default());
    typed_body.ty = Some(Type::declared("Int"));
    assert!(typed_body.render(&context).is_err());

    let mut empty = ObjectProperty::value("foo", Expression::Int(1));
    empty.value = None;
    assert!(empty.render(&context).is_err());

    // A type alone is not an object member
    let mut type_only = ObjectProperty::value("foo", Expression::Int(1));
    type_only.value = None;
    type_only.ty = Some(Type::declared("String"));
    let err = type_only.render(&context).unwrap_err();
    assert!(err.to_string().contains("needs a value or a body"));
}

#[test]
fn test_object_method() {
    let mut signature = MethodSignature::new("double");
    signature.parameters.push(Parameter::new("x"));
    let method = ObjectMember::Method(ObjectMethod {
        signature,
        value: Expression::binary(BinaryOperator::Multiply, Expression::name("x"), Expression::Int(2)),
    });
    assert_eq!(render_str(&method), "function double(x) = x * 2");
}

#[test]
fn test_object_entry() {
    let valued = ObjectEntry {
        key: Expression::call("foo", vec![]),
        value: Some(Expression::string("bar")),
        bodies: vec![],
    };
    assert_eq!(render_str(&valued), "[foo()] = \"bar\"");

    let amended = ObjectEntry {
        key: Expression::string("a"),
        value: None,
        bodies: vec![ObjectBody::new(vec![ObjectMember::Element(Expression::Int(1))])],
    };
    assert_eq!(render_str(&amended), "[\"a\"] {\n  1\n}");

    let context = RenderContext::new();
    let neither = ObjectEntry {
        key: Expression::string("a"),
        value: None,
        bodies: vec![],
    };
    assert!(neither.render(&context).is_err());

    let both = ObjectEntry {
        key: Expression::string("a"),
        value: Some(Expression::Int(1)),
        bodies: vec![ObjectBody::default()],
    };
    assert!(both.render(&context).is_err());
}

#[test]
fn test_elements_and_spreads() {
    assert_eq!(render_str(&ObjectMember::Element(Expression::Int(1))), "1");

    let spread = ObjectMember::Spread {
        value: Expression::name("foo"),
        nullable: false,
    };
    assert_eq!(render_str(&spread), "...foo");

    let nullable_spread = ObjectMember::Spread {
        value: Expression::name("foo"),
        nullable: true,
    };
    assert_eq!(render_str(&nullable_spread), "...?foo");
}

#[test]
fn test_member_predicate() {
    let condition = Expression::binary(
        BinaryOperator::Equal,
        Expression::name("foo"),
        Expression::string("bar"),
    );

    let valued = MemberPredicate {
        condition: condition.clone(),
        value: Some(Expression::string("baz")),
        bodies: vec![],
    };
    assert_eq!(render_str(&valued), "[[foo == \"bar\"]] = \"baz\"");

    let amended = MemberPredicate {
        condition: condition.clone(),
        value: None,
        bodies: vec![ObjectBody::new(vec![property("x", Expression::Int(1))])],
    };
    assert_eq!(render_str(&amended), "[[foo == \"bar\"]] {\n  x = 1\n}");

    let neither = MemberPredicate {
        condition,
        value: None,
        bodies: vec![],
    };
    assert!(neither.render(&RenderContext::new()).is_err());
}

#[test]
fn test_for_generator() {
    let body = ObjectBody::new(vec![property("value", Expression::name("item"))]);

    let generator = ForGenerator {
        key: None,
        value: Parameter::new("item"),
        collection: Expression::name("items"),
        body: body.clone(),
    };
    assert_eq!(render_str(&generator), "for (item in items) {\n  value = item\n}");

    let keyed = ForGenerator {
        key: Some(Parameter::new("index")),
        value: Parameter::new("item"),
        collection: Expression::name("items"),
        body,
    };
    assert_eq!(
        render_str(&keyed),
        "for (index, item in items) {\n  value = item\n}"
    );
}

#[test]
fn test_when_generator() {
    let condition = Expression::binary(
        BinaryOperator::Equal,
        Expression::name("foo"),
        Expression::string("bar"),
    );
    let then = ObjectBody::new(vec![property("value", Expression::string("baz"))]);

    let without_else = WhenGenerator {
        condition: condition.clone(),
        then: then.clone(),
        otherwise: None,
    };
    assert_eq!(
        render_str(&without_else),
        "when (foo == \"bar\") {\n  value = \"baz\"\n}"
    );

    let with_else = WhenGenerator {
        condition,
        then,
        otherwise: Some(ObjectBody::new(vec![property(
            "value",
            Expression::string("qux"),
        )])),
    };
    assert_eq!(
        render_str(&with_else),
        "when (foo == \"bar\") {\n  value = \"baz\"\n} else {\n  value = \"qux\"\n}"
    );
}

#[test]
fn test_generators_nested_in_body() {
    let body = ObjectBody::new(vec![ObjectMember::For(ForGenerator {
        key: None,
        value: Parameter::new("item"),
        collection: Expression::name("items"),
        body: ObjectBody::new(vec![ObjectMember::Element(Expression::name("item"))]),
    })]);
    assert_eq!(
        render_str(&body),
        "{\n  for (item in items) {\n    item\n  }\n}"
    );
}
