use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ast::object::ObjectBody;
use crate::ast::types::Type;

/// A plain name token such as a property or parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `_` placeholder used for ignored parameters.
    pub fn blank() -> Self {
        Self("_".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A name that may contain dots, e.g. `foo.Bar`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualifiedIdentifier(pub String);

impl QualifiedIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QualifiedIdentifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Abstract,
    Const,
    External,
    Fixed,
    Hidden,
    Local,
    Open,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Abstract => "abstract",
            Modifier::Const => "const",
            Modifier::External => "external",
            Modifier::Fixed => "fixed",
            Modifier::Hidden => "hidden",
            Modifier::Local => "local",
            Modifier::Open => "open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixOperator {
    Minus,
    LogicalNot,
}

impl PrefixOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Minus => "-",
            PrefixOperator::LogicalNot => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostfixOperator {
    NonNullAssertion,
}

impl PostfixOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostfixOperator::NonNullAssertion => "!!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    IntegerDivide,
    Modulo,
    Exponent,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    BitwiseAnd,
    BitwiseOr,
    LogicalAnd,
    LogicalOr,
    NullCoalesce,
    Pipe,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::IntegerDivide => "~/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Exponent => "**",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::NullCoalesce => "??",
            BinaryOperator::Pipe => "|>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeOperator {
    Is,
    As,
}

impl TypeOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeOperator::Is => "is",
            TypeOperator::As => "as",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    Identifier,
    QualifiedIdentifier,
    Modifier,
    PrefixOperator,
    PostfixOperator,
    BinaryOperator,
    TypeOperator
);

/// Standalone comment nodes. Declarations carry their docs as plain text
/// instead of a `Comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comment {
    /// `// text`, indented to the current depth.
    Line(String),
    /// `/* ... */` with the delimiters on their own lines. Non-empty content
    /// lines get two extra spaces past the comment's indentation; blank lines
    /// carry only the comment's indentation.
    Block(String),
    /// `/// text`, one marker per line.
    Docs(String),
    /// `#! text`, only meaningful as the first line of a module.
    Shebang(String),
}

/// A value parameter, as used by object bodies, `let` and `for`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Identifier,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Identifier::new(name),
            ty: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: Identifier::new(name),
            ty: Some(ty),
        }
    }

    pub fn blank() -> Self {
        Self {
            name: Identifier::blank(),
            ty: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variance {
    In,
    Out,
}

impl Variance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variance::In => "in",
            Variance::Out => "out",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<Variance>,
    pub name: Identifier,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            variance: None,
            name: Identifier::new(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: QualifiedIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ObjectBody>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: QualifiedIdentifier::new(name),
            body: None,
        }
    }
}
