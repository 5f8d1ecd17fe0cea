use serde::{Deserialize, Serialize};

use crate::ast::lexical::*;
use crate::ast::object::ObjectBody;
use crate::ast::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinExpression {
    This,
    Outer,
    Module,
    Null,
    True,
    False,
}

impl BuiltinExpression {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinExpression::This => "this",
            BuiltinExpression::Outer => "outer",
            BuiltinExpression::Module => "module",
            BuiltinExpression::Null => "null",
            BuiltinExpression::True => "true",
            BuiltinExpression::False => "false",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadVariant {
    #[default]
    Plain,
    Nullable,
    Glob,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    Builtin(BuiltinExpression),
    Int(i64),
    Float(f64),
    String(String),
    PrefixUnary {
        operator: PrefixOperator,
        operand: Box<Expression>,
    },
    PostfixUnary {
        operator: PostfixOperator,
        operand: Box<Expression>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// `expr is Type` / `expr as Type`.
    TypeTest {
        operator: TypeOperator,
        expression: Box<Expression>,
        #[serde(rename = "type")]
        ty: Type,
    },
    /// A bare name, or a call when `arguments` is present (even if empty).
    MemberAccess {
        name: Identifier,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arguments: Option<Vec<Expression>>,
    },
    QualifiedMemberAccess {
        receiver: Box<Expression>,
        #[serde(default)]
        nullable: bool,
        name: Identifier,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arguments: Option<Vec<Expression>>,
    },
    SuperAccess {
        name: Identifier,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arguments: Option<Vec<Expression>>,
    },
    Subscript {
        receiver: Box<Expression>,
        subscript: Box<Expression>,
    },
    SuperSubscript {
        subscript: Box<Expression>,
    },
    Parenthesized(Box<Expression>),
    New(NewExpression),
    Amend(AmendExpression),
    If {
        condition: Box<Expression>,
        then: Box<Expression>,
        #[serde(rename = "else")]
        otherwise: Box<Expression>,
    },
    Import {
        path: String,
        #[serde(default)]
        glob: bool,
    },
    Let {
        parameter: Parameter,
        value: Box<Expression>,
        body: Box<Expression>,
    },
    Read {
        #[serde(default)]
        variant: ReadVariant,
        value: Box<Expression>,
    },
    Throw(Box<Expression>),
    Trace(Box<Expression>),
}

/// `new [Type] { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpression {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
    pub body: ObjectBody,
}

/// `parent { ... }` where the parent is itself parenthesized, a `new`, or
/// another amendment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmendExpression {
    pub parent: AmendParent,
    pub body: ObjectBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmendParent {
    Parenthesized(Box<Expression>),
    New(Box<NewExpression>),
    Amend(Box<AmendExpression>),
}

impl Expression {
    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(value.into())
    }

    /// A bare name reference such as `items`.
    pub fn name(name: impl Into<String>) -> Self {
        Expression::MemberAccess {
            name: Identifier::new(name),
            arguments: None,
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::MemberAccess {
            name: Identifier::new(name),
            arguments: Some(arguments),
        }
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
