use anyhow::{bail, Result};

use crate::ast::*;
use crate::renderer::components::*;
use crate::renderer::renders::render_modifiers;
use crate::renderer::traits::*;

impl Render for ObjectBody {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = String::from("{");

        output.push_wrapped(" ", &join_nodes(&self.parameters, context, ", ")?, " ->");

        // Members sit one level deeper; the closing brace returns to our depth.
        if !self.members.is_empty() {
            let member_context = context.nested();
            let member_break = member_context.line_break();
            output.push_str(&member_break);
            output.push_str(&join_nodes(&self.members, &member_context, &member_break)?);
            output.push_str(&context.line_break());
        }

        output.push('}');
        Ok(output)
    }
}

impl Render for ObjectMember {
    fn render(&self, context: &RenderContext) -> Result<String> {
        match self {
            ObjectMember::Property(property) => property.render(context),
            ObjectMember::Method(method) => method.render(context),
            ObjectMember::Entry(entry) => entry.render(context),
            ObjectMember::Element(value) => value.render(context),
            ObjectMember::Spread { value, nullable } => {
                let prefix = if *nullable { "...?" } else { "..." };
                Ok(format!("{}{}", prefix, value.render(context)?))
            }
            ObjectMember::Predicate(predicate) => predicate.render(context),
            ObjectMember::For(generator) => generator.render(context),
            ObjectMember::When(generator) => generator.render(context),
        }
    }
}

/// `value` as ` = value`, or the bodies joined by spaces as ` {..} {..}`.
fn render_value_or_bodies(
    value: Option<&Expression>,
    bodies: &[ObjectBody],
    context: &RenderContext,
) -> Result<String> {
    let mut output = String::new();
    if let Some(value) = value {
        output.push_with_prefix(" = ", &value.render(context)?);
    }
    output.push_with_prefix(" ", &join_nodes(bodies, context, " ")?);
    Ok(output)
}

impl Render for ObjectProperty {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let has_bodies = !self.bodies.is_empty();
        if has_bodies && (self.ty.is_some() || self.value.is_some()) {
            bail!(
                "object property `{}` cannot combine an amending body with a type or value",
                self.name
            );
        }
        if !has_bodies && self.value.is_none() {
            bail!("object property `{}` needs a value or a body", self.name);
        }

        let mut output = render_modifiers(&self.modifiers, context)?;
        output.push_str(&self.name.render(context)?);
        if let Some(ty) = &self.ty {
            output.push_with_prefix(": ", &ty.render(context)?);
        }
        output.push_str(&render_value_or_bodies(self.value.as_ref(), &self.bodies, context)?);
        Ok(output)
    }
}

impl Render for ObjectMethod {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = self.signature.render(context)?;
        output.push_with_prefix(" = ", &self.value.render(context)?);
        Ok(output)
    }
}

impl Render for ObjectEntry {
    fn render(&self, context: &RenderContext) -> Result<String> {
        if self.value.is_some() == !self.bodies.is_empty() {
            bail!("object entry needs exactly one of a value or a body");
        }

        let mut output = String::new();
        output.push_wrapped("[", &self.key.render(context)?, "]");
        output.push_str(&render_value_or_bodies(self.value.as_ref(), &self.bodies, context)?);
        Ok(output)
    }
}

impl Render for MemberPredicate {
    fn render(&self, context: &RenderContext) -> Result<String> {
        if self.value.is_some() == !self.bodies.is_empty() {
            bail!("member predicate needs exactly one of a value or a body");
        }

        let mut output = String::new();
        output.push_wrapped("[[", &self.condition.render(context)?, "]]");
        output.push_str(&render_value_or_bodies(self.value.as_ref(), &self.bodies, context)?);
        Ok(output)
    }
}

impl Render for ForGenerator {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = String::from("for (");
        if let Some(key) = &self.key {
            output.push_with_suffix(&key.render(context)?, ", ");
        }
        output.push_str(&self.value.render(context)?);
        output.push_wrapped(" in ", &self.collection.render(context)?, ") ");
        output.push_str(&self.body.render(context)?);
        Ok(output)
    }
}

impl Render for WhenGenerator {
    fn render(&self, context: &RenderContext) -> Result<String> {
        let mut output = String::new();
        output.push_wrapped("when (", &self.condition.render(context)?, ") ");
        output.push_str(&self.then.render(context)?);
        if let Some(otherwise) = &self.otherwise {
            output.push_with_prefix(" else ", &otherwise.render(context)?);
        }
        Ok(output)
    }
}
