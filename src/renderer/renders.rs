use anyhow::Result;

use crate::ast::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for Identifier {
    fn render(&self, _context: &RenderContext) -> Result<String> {
        Ok(self.0.clone())
    }
}

impl Render for QualifiedIdentifier {
    fn render(&self, _context: &RenderContext) -> Result<String> {
        Ok(self.0.clone())
    }
}

impl Render for Modifier {
    fn render(&self, _context: &RenderContext) -> Result<String> {
        Ok(self.as_str().to_string())
    }
}

impl Render for Comment {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let doc_renderer = DocRenderer;
        Ok(match self {
            Comment::Line(text) => doc_renderer.render_line_comment(text, context),
            Comment::Block(text) => doc_renderer.render_block_comment(text, context),
            Comment::Docs(text) => doc_renderer.render_docs(Some(text), context),
            Comment::Shebang(text) => doc_renderer.render_shebang(text),
        })
    }
}

impl Render for Parameter {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = self.name.render(context)?;
        if let Some(ty) = &self.ty {
            output.push_with_prefix(": ", &ty.render(context)?);
        }
        Ok(output)
    }
}

impl Render for TypeParameter {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = String::new();
        if let Some(variance) = self.variance {
            output.push_str(variance.as_str());
            output.push(' ');
        }
        output.push_str(&self.name.render(context)?);
        Ok(output)
    }
}

/// `<A, B>`, or nothing for an empty list.
pub fn render_type_parameters(params: &[TypeParameter], context: &RenderContext) -> Result<String> {
    let mut output = String::new();
    output.push_wrapped("<", &join_nodes(params, context, ", ")?, ">");
    Ok(output)
}

/// Space-separated modifiers followed by a single space, or nothing.
pub fn render_modifiers(modifiers: &[Modifier], context: &RenderContext) -> Result<String> {
    let mut output = String::new();
    output.push_with_suffix(&join_nodes(modifiers, context, " ")?, " ");
    Ok(output)
}

/// Annotations, one per line at the current depth.
pub fn render_annotations(annotations: &[Annotation], context: &RenderContext) -> Result<String> {
    join_nodes(annotations, context, &context.line_break())
}

fn render_arguments(arguments: Option<&Vec<Expression>>, context: &RenderContext) -> Result<String> {
    match arguments {
        Some(args) => Ok(format!("({})", join_nodes(args, context, ", ")?)),
        None => Ok(String::new()),
    }
}

impl Render for Annotation {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = String::new();
        output.push_with_prefix("@", &self.name.render(context)?);
        if let Some(body) = &self.body {
            output.push_with_prefix(" ", &body.render(context)?);
        }
        Ok(output)
    }
}

impl Render for Expression {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let literal_renderer = LiteralRenderer;
        let mut output = String::new();

        match self {
            Expression::Builtin(builtin) => output.push_str(builtin.as_str()),
            Expression::Int(value) => output.push_str(&value.to_string()),
            Expression::Float(value) => output.push_str(&literal_renderer.format_float(*value)),
            Expression::String(value) => output.push_str(&literal_renderer.quote(value)),
            Expression::PrefixUnary { operator, operand } => {
                output.push_str(operator.as_str());
                output.push_str(&operand.render(context)?);
            }
            Expression::PostfixUnary { operator, operand } => {
                output.push_str(&operand.render(context)?);
                output.push_str(operator.as_str());
            }
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                let left = left.render(context)?;
                let right = right.render(context)?;
                output.push_with_suffix(&left, " ");
                output.push_str(operator.as_str());
                output.push_with_prefix(" ", &right);
            }
            Expression::TypeTest {
                operator,
                expression,
                ty,
            } => {
                let expression = expression.render(context)?;
                let ty = ty.render(context)?;
                output.push_with_suffix(&expression, " ");
                output.push_str(operator.as_str());
                output.push_with_prefix(" ", &ty);
            }
            Expression::MemberAccess { name, arguments } => {
                output.push_str(&name.render(context)?);
                output.push_str(&render_arguments(arguments.as_ref(), context)?);
            }
            Expression::QualifiedMemberAccess {
                receiver,
                nullable,
                name,
                arguments,
            } => {
                output.push_str(&receiver.render(context)?);
                output.push_str(if *nullable { "?." } else { "." });
                output.push_str(&name.render(context)?);
                output.push_str(&render_arguments(arguments.as_ref(), context)?);
            }
            Expression::SuperAccess { name, arguments } => {
                output.push_with_prefix("super.", &name.render(context)?);
                output.push_str(&render_arguments(arguments.as_ref(), context)?);
            }
            Expression::Subscript {
                receiver,
                subscript,
            } => {
                output.push_str(&receiver.render(context)?);
                output.push_wrapped("[", &subscript.render(context)?, "]");
            }
            Expression::SuperSubscript { subscript } => {
                output.push_wrapped("super[", &subscript.render(context)?, "]");
            }
            Expression::Parenthesized(inner) => {
                output.push_wrapped("(", &inner.render(context)?, ")");
            }
            Expression::New(new) => output.push_str(&new.render(context)?),
            Expression::Amend(amend) => output.push_str(&amend.render(context)?),
            Expression::If {
                condition,
                then,
                otherwise,
            } => {
                output.push_wrapped("if (", &condition.render(context)?, ") ");
                output.push_str(&then.render(context)?);
                output.push_with_prefix(" else ", &otherwise.render(context)?);
            }
            Expression::Import { path, glob } => {
                output.push_str(if *glob { "import*(" } else { "import(" });
                output.push_str(&literal_renderer.quote(path));
                output.push(')');
            }
            Expression::Let {
                parameter,
                value,
                body,
            } => {
                output.push_wrapped("let (", &parameter.render(context)?, " = ");
                output.push_with_suffix(&value.render(context)?, ") ");
                output.push_str(&body.render(context)?);
            }
            Expression::Read { variant, value } => {
                output.push_str(match variant {
                    ReadVariant::Plain => "read(",
                    ReadVariant::Nullable => "read?(",
                    ReadVariant::Glob => "read*(",
                });
                output.push_str(&value.render(context)?);
                output.push(')');
            }
            Expression::Throw(value) => {
                output.push_wrapped("throw(", &value.render(context)?, ")");
            }
            Expression::Trace(value) => {
                output.push_wrapped("trace(", &value.render(context)?, ")");
            }
        }

        Ok(output)
    }
}

impl Render for NewExpression {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = String::from("new ");
        if let Some(ty) = &self.ty {
            output.push_with_suffix(&ty.render(context)?, " ");
        }
        output.push_str(&self.body.render(context)?);
        Ok(output)
    }
}

impl Render for AmendExpression {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let parent = self.parent.render(context)?;
        let body = self.body.render(context)?;
        Ok(format!("{} {}", parent, body))
    }
}

impl Render for AmendParent {
    fn render(&self, context: &RenderContext) -> Result<String> {
        match self {
            AmendParent::Parenthesized(inner) => Ok(format!("({})", inner.render(context)?)),
            AmendParent::New(new) => new.render(context),
            AmendParent::Amend(amend) => amend.render(context),
        }
    }
}

impl Render for Type {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let literal_renderer = LiteralRenderer;
        let mut output = String::new();

        match self {
            Type::Builtin(builtin) => output.push_str(builtin.as_str()),
            Type::StringLiteral(value) => output.push_str(&literal_renderer.quote(value)),
            Type::Declared { name, arguments } => {
                output.push_str(&name.render(context)?);
                output.push_wrapped("<", &join_nodes(arguments, context, ", ")?, ">");
            }
            Type::Parenthesized(inner) => {
                output.push_wrapped("(", &inner.render(context)?, ")");
            }
            Type::Nullable(inner) => {
                output.push_with_suffix(&inner.render(context)?, "?");
            }
            Type::Constrained { ty, constraints } => {
                output.push_str(&ty.render(context)?);
                output.push_wrapped("(", &join_nodes(constraints, context, ", ")?, ")");
            }
            Type::Union { members, default } => {
                output.push_str(&join_nodes(members, context, " | ")?);
                if let Some(default) = default {
                    let default = default.render(context)?;
                    output.push_str(if members.is_empty() { "*" } else { " | *" });
                    output.push_str(&default);
                }
            }
            Type::FunctionLiteral { parameters, result } => {
                output.push('(');
                output.push_str(&join_nodes(parameters, context, ", ")?);
                output.push(')');
                output.push_with_prefix(" -> ", &result.render(context)?);
            }
        }

        Ok(output)
    }
}
