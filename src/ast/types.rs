use serde::{Deserialize, Serialize};

use crate::ast::expression::Expression;
use crate::ast::lexical::QualifiedIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinType {
    Unknown,
    Nothing,
    Module,
}

impl BuiltinType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinType::Unknown => "unknown",
            BuiltinType::Nothing => "nothing",
            BuiltinType::Module => "module",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Builtin(BuiltinType),
    StringLiteral(String),
    /// `Name` or `Name<Arg, ...>`.
    Declared {
        name: QualifiedIdentifier,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        arguments: Vec<Type>,
    },
    Parenthesized(Box<Type>),
    Nullable(Box<Type>),
    Constrained {
        #[serde(rename = "type")]
        ty: Box<Type>,
        #[serde(default)]
        constraints: Vec<Expression>,
    },
    Union {
        members: Vec<Type>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Box<Type>>,
    },
    FunctionLiteral {
        #[serde(default)]
        parameters: Vec<Type>,
        result: Box<Type>,
    },
}

impl Type {
    pub fn declared(name: impl Into<String>) -> Self {
        Type::Declared {
            name: QualifiedIdentifier::new(name),
            arguments: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<Type>) -> Self {
        Type::Declared {
            name: QualifiedIdentifier::new(name),
            arguments,
        }
    }

    pub fn nullable(inner: Type) -> Self {
        Type::Nullable(Box::new(inner))
    }
}
