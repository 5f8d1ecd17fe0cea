use anyhow::Result;

/// Indentation state threaded through rendering.
///
/// Contexts are never mutated: entering a nested body derives a new one, so
/// siblings always see the depth of their parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    /// Context for the members of a body opened at this depth.
    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }

    /// `"\n"` followed by this context's indentation.
    pub fn line_break(&self) -> String {
        format!("\n{}", self.indent())
    }
}

/// Core rendering trait for all tree nodes
pub trait Render {
    fn render(&self, context: &RenderContext) -> Result<String>;
}
