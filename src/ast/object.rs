use serde::{Deserialize, Serialize};

use crate::ast::declaration::MethodSignature;
use crate::ast::expression::Expression;
use crate::ast::lexical::*;
use crate::ast::types::Type;

/// `{ params -> members }`. Renders as `{}` when both lists are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectBody {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub members: Vec<ObjectMember>,
}

impl ObjectBody {
    pub fn new(members: Vec<ObjectMember>) -> Self {
        Self {
            parameters: Vec::new(),
            members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectMember {
    Property(ObjectProperty),
    Method(ObjectMethod),
    Entry(ObjectEntry),
    Element(Expression),
    Spread {
        value: Expression,
        #[serde(default)]
        nullable: bool,
    },
    Predicate(MemberPredicate),
    For(ForGenerator),
    When(WhenGenerator),
}

/// Bodies are exclusive with both `ty` and `value`. Without bodies a value is
/// required; `ty` only annotates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Expression>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<ObjectBody>,
}

impl ObjectProperty {
    pub fn value(name: impl Into<String>, value: Expression) -> Self {
        Self {
            modifiers: Vec::new(),
            name: Identifier::new(name),
            ty: None,
            value: Some(value),
            bodies: Vec::new(),
        }
    }

    pub fn amending(name: impl Into<String>, body: ObjectBody) -> Self {
        Self {
            modifiers: Vec::new(),
            name: Identifier::new(name),
            ty: None,
            value: None,
            bodies: vec![body],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMethod {
    pub signature: MethodSignature,
    pub value: Expression,
}

/// `[key] = value` or `[key] { ... }`; exactly one of the two forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub key: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Expression>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<ObjectBody>,
}

/// `[[condition]] = value` or `[[condition]] { ... }`; exactly one of the two forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberPredicate {
    pub condition: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Expression>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<ObjectBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForGenerator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Parameter>,
    pub value: Parameter,
    pub collection: Expression,
    pub body: ObjectBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenGenerator {
    pub condition: Expression,
    pub then: ObjectBody,
    #[serde(default, rename = "else", skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<ObjectBody>,
}
