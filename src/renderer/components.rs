use anyhow::Result;

use crate::renderer::traits::*;

/// Conditional concatenation: decorations are only written around a
/// non-empty payload.
pub trait PushNonEmpty {
    fn push_with_prefix(&mut self, prefix: &str, payload: &str);
    fn push_with_suffix(&mut self, payload: &str, suffix: &str);
    fn push_wrapped(&mut self, prefix: &str, payload: &str, suffix: &str);
}

impl PushNonEmpty for String {
    fn push_with_prefix(&mut self, prefix: &str, payload: &str) {
        self.push_wrapped(prefix, payload, "");
    }

    fn push_with_suffix(&mut self, payload: &str, suffix: &str) {
        self.push_wrapped("", payload, suffix);
    }

    fn push_wrapped(&mut self, prefix: &str, payload: &str, suffix: &str) {
        if payload.is_empty() {
            return;
        }
        self.push_str(prefix);
        self.push_str(payload);
        self.push_str(suffix);
    }
}

/// Render each node in order and join the results with `separator`.
///
/// Stops at the first failing node; an empty slice renders as `""`.
pub fn join_nodes<N: Render>(nodes: &[N], context: &RenderContext, separator: &str) -> Result<String> {
    let mut output = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            output.push_str(separator);
        }
        output.push_str(&node.render(context)?);
    }
    Ok(output)
}

/// Helper for rendering documentation and comments
pub struct DocRenderer;

impl DocRenderer {
    /// `/// line` per input line, joined with line breaks at the current
    /// depth. Blank lines become a bare `///`.
    pub fn render_docs(&self, docs: Option<&str>, context: &RenderContext) -> String {
        let Some(docs) = docs.filter(|d| !d.is_empty()) else {
            return String::new();
        };

        let separator = context.line_break();
        docs.split('\n')
            .map(|line| {
                if line.is_empty() {
                    "///".to_string()
                } else {
                    format!("/// {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    pub fn render_line_comment(&self, text: &str, context: &RenderContext) -> String {
        let mut output = String::new();
        output.push_with_prefix(&format!("{}// ", context.indent()), text);
        output
    }

    pub fn render_block_comment(&self, text: &str, context: &RenderContext) -> String {
        if text.is_empty() {
            return String::new();
        }

        let line_break = context.line_break();
        let mut output = String::from("/*");
        output.push_str(&line_break);
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                output.push_str(&line_break);
            }
            output.push_with_prefix("  ", line);
        }
        output.push_str(&line_break);
        output.push_str("*/");
        output
    }

    pub fn render_shebang(&self, text: &str) -> String {
        let mut output = String::new();
        output.push_with_prefix("#! ", text);
        output
    }
}

/// Helper for rendering literal tokens
pub struct LiteralRenderer;

impl LiteralRenderer {
    /// Double-quoted string literal with backslash escapes.
    pub fn quote(&self, value: &str) -> String {
        let mut output = String::with_capacity(value.len() + 2);
        output.push('"');
        for c in value.chars() {
            match c {
                '\\' => output.push_str("\\\\"),
                '"' => output.push_str("\\\""),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => output.push_str(&format!("\\u{{{:x}}}", c as u32)),
                c => output.push(c),
            }
        }
        output.push('"');
        output
    }

    /// Shortest decimal that reads back as the same value, without an
    /// exponent.
    pub fn format_float(&self, value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if value.is_sign_positive() {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            }
        } else {
            value.to_string()
        }
    }
}
