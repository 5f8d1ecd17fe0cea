use anyhow::{bail, Result};

use crate::ast::*;
use crate::renderer::components::*;
use crate::renderer::renders::{render_annotations, render_modifiers, render_type_parameters};
use crate::renderer::traits::*;

/// Docs, annotations and modifiers ahead of a declaration's keyword. Each
/// part is skipped entirely when absent.
fn render_preamble(
    docs: Option<&str>,
    annotations: &[Annotation],
    modifiers: &[Modifier],
    context: &RenderContext,
) -> Result<String> {
    let doc_renderer = DocRenderer;
    let line_break = context.line_break();

    let mut output = String::new();
    output.push_with_suffix(&doc_renderer.render_docs(docs, context), &line_break);
    output.push_with_suffix(&render_annotations(annotations, context)?, &line_break);
    output.push_str(&render_modifiers(modifiers, context)?);
    Ok(output)
}

impl Render for Class {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = render_preamble(
            self.docs.as_deref(),
            &self.annotations,
            &self.modifiers,
            context,
        )?;

        output.push_with_prefix("class ", &self.name.render(context)?);
        output.push_str(&render_type_parameters(&self.type_parameters, context)?);
        if let Some(parent) = &self.extends {
            output.push_with_prefix(" extends ", &parent.render(context)?);
        }

        // No braces at all for a memberless class
        if !self.members.is_empty() {
            let member_context = context.nested();
            let member_break = member_context.line_break();
            let separator = format!("\n{}", member_break);

            output.push_str(" {");
            output.push_str(&member_break);
            output.push_str(&join_nodes(&self.members, &member_context, &separator)?);
            output.push_str(&context.line_break());
            output.push('}');
        }

        Ok(output)
    }
}

impl Render for ClassMember {
    fn render(&self, context: &RenderContext) -> Result<String> {
        match self {
            ClassMember::Property(property) => property.render(context),
            ClassMember::Method(method) => method.render(context),
        }
    }
}

impl Render for ClassProperty {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let has_value = self.ty.is_some() || self.expression.is_some();
        if has_value && self.body.is_some() {
            bail!(
                "property `{}` cannot combine an amending body with a type or expression",
                self.name
            );
        }
        if !has_value && self.body.is_none() {
            bail!("property `{}` needs a type, an expression, or a body", self.name);
        }

        let mut output = render_preamble(
            self.docs.as_deref(),
            &self.annotations,
            &self.modifiers,
            context,
        )?;

        output.push_str(&self.name.render(context)?);
        if let Some(ty) = &self.ty {
            output.push_with_prefix(": ", &ty.render(context)?);
        }
        if let Some(expression) = &self.expression {
            output.push_with_prefix(" = ", &expression.render(context)?);
        }
        if let Some(body) = &self.body {
            output.push_with_prefix(" ", &body.render(context)?);
        }

        Ok(output)
    }
}

impl Render for MethodSignature {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = render_modifiers(&self.modifiers, context)?;

        output.push_with_prefix("function ", &self.name.render(context)?);
        output.push_str(&render_type_parameters(&self.type_parameters, context)?);
        output.push('(');
        output.push_str(&join_nodes(&self.parameters, context, ", ")?);
        output.push(')');
        if let Some(result) = &self.result {
            output.push_with_prefix(": ", &result.render(context)?);
        }

        Ok(output)
    }
}

impl Render for ClassMethod {
    fn render(&self, context: &RenderContext) -> Result<String> {
        // Modifiers belong to the signature
        let mut output = render_preamble(self.docs.as_deref(), &self.annotations, &[], context)?;

        output.push_str(&self.signature.render(context)?);
        if let Some(implementation) = &self.implementation {
            output.push_with_prefix(" = ", &implementation.render(context)?);
        }

        Ok(output)
    }
}

impl Render for TypeAlias {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = render_preamble(
            self.docs.as_deref(),
            &self.annotations,
            &self.modifiers,
            context,
        )?;

        output.push_with_prefix("typealias ", &self.name.render(context)?);
        output.push_str(&render_type_parameters(&self.parameters, context)?);
        output.push_with_prefix(" = ", &self.ty.render(context)?);

        Ok(output)
    }
}

impl Render for ImportClause {
    fn render(&self, _context: &RenderContext) -> Result<String> {
        let literal_renderer = LiteralRenderer;

        let mut output = String::from(if self.glob { "import* " } else { "import " });
        output.push_str(&literal_renderer.quote(&self.path));
        if let Some(alias) = &self.alias {
            output.push_with_prefix(" as ", alias);
        }

        Ok(output)
    }
}

impl Render for ModuleMember {
    fn render(&self, context: &RenderContext) -> Result<String> {
        match self {
            ModuleMember::Class(class) => class.render(context),
            ModuleMember::Property(property) => property.render(context),
            ModuleMember::Method(method) => method.render(context),
            ModuleMember::TypeAlias(alias) => alias.render(context),
        }
    }
}

impl Render for Module {
    fn render(&self, context: &RenderContext) -> Result<String> {
        if self.name.is_none() && self.parent.is_none() {
            bail!("module needs a name, a parent clause, or both");
        }

        let doc_renderer = DocRenderer;
        let literal_renderer = LiteralRenderer;
        let mut output = String::new();

        if let Some(shebang) = &self.shebang {
            output.push_with_suffix(&doc_renderer.render_shebang(shebang), "\n");
        }
        output.push_with_suffix(&doc_renderer.render_docs(self.docs.as_deref(), context), "\n");
        output.push_with_suffix(&render_annotations(&self.annotations, context)?, "\n");
        output.push_str(&render_modifiers(&self.modifiers, context)?);

        // Header: `module name`, `amends "uri"`, or both separated by a space
        if let Some(name) = &self.name {
            output.push_with_prefix("module ", &name.render(context)?);
        }
        if let Some(parent) = &self.parent {
            if self.name.is_some() {
                output.push(' ');
            }
            output.push_str(parent.relationship.as_str());
            output.push(' ');
            output.push_str(&literal_renderer.quote(&parent.uri));
        }
        output.push('\n');

        output.push_wrapped("\n", &join_nodes(&self.imports, context, "\n")?, "\n");
        output.push_wrapped("\n", &join_nodes(&self.members, context, "\n\n")?, "\n");

        Ok(output)
    }
}
