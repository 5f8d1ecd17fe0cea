use serde::{Deserialize, Serialize};

use crate::ast::expression::Expression;
use crate::ast::lexical::*;
use crate::ast::object::ObjectBody;
use crate::ast::types::Type;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
    /// Parent class, rendered as ` extends Parent<Args>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<Type>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ClassMember>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            docs: None,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            name: Identifier::new(name),
            type_parameters: Vec::new(),
            extends: None,
            members: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassMember {
    Property(ClassProperty),
    Method(ClassMethod),
}

/// A property declared in a class or module.
///
/// Either a type and/or an expression, or a body amending the inherited
/// value. Mixing the body with the other two is rejected at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<Expression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ObjectBody>,
}

impl ClassProperty {
    fn bare(name: impl Into<String>) -> Self {
        Self {
            docs: None,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            name: Identifier::new(name),
            ty: None,
            expression: None,
            body: None,
        }
    }

    pub fn typed(name: impl Into<String>, ty: Type) -> Self {
        Self {
            ty: Some(ty),
            ..Self::bare(name)
        }
    }

    pub fn assigned(name: impl Into<String>, expression: Expression) -> Self {
        Self {
            expression: Some(expression),
            ..Self::bare(name)
        }
    }

    pub fn amending(name: impl Into<String>, body: ObjectBody) -> Self {
        Self {
            body: Some(body),
            ..Self::bare(name)
        }
    }
}

/// `[modifiers] function name<T>(params)[: Result]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSignature {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Type>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            name: Identifier::new(name),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            result: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    pub signature: MethodSignature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<Expression>,
}

impl ClassMethod {
    pub fn new(signature: MethodSignature) -> Self {
        Self {
            docs: None,
            annotations: Vec::new(),
            signature,
            implementation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAlias {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    pub name: Identifier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<TypeParameter>,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            docs: None,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            name: Identifier::new(name),
            parameters: Vec::new(),
            ty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleRelationship {
    Extends,
    Amends,
}

impl ModuleRelationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleRelationship::Extends => "extends",
            ModuleRelationship::Amends => "amends",
        }
    }
}

/// `extends "uri"` / `amends "uri"` in a module header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleParent {
    pub relationship: ModuleRelationship,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportClause {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub glob: bool,
}

impl ImportClause {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
            glob: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleMember {
    Class(Class),
    Property(ClassProperty),
    Method(ClassMethod),
    TypeAlias(TypeAlias),
}

/// The root of a rendered file. Needs a name, a parent, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shebang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<QualifiedIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ModuleParent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<ImportClause>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ModuleMember>,
}

impl Module {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(QualifiedIdentifier::new(name)),
            ..Self::default()
        }
    }

    pub fn amending(uri: impl Into<String>) -> Self {
        Self {
            parent: Some(ModuleParent {
                relationship: ModuleRelationship::Amends,
                uri: uri.into(),
            }),
            ..Self::default()
        }
    }
}
