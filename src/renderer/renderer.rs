use anyhow::Result;
use tracing::trace;

use crate::renderer::traits::*;

/// Entry point: renders a root node starting from a zero-depth context.
pub struct PklRenderer;

impl PklRenderer {
    pub fn render<N: Render + ?Sized>(&self, root: &N) -> Result<String> {
        let context = RenderContext::new();
        let output = root.render(&context)?;
        trace!(bytes = output.len(), "rendered tree");
        Ok(output)
    }

    pub fn render_bytes<N: Render + ?Sized>(&self, root: &N) -> Result<Vec<u8>> {
        self.render(root).map(String::into_bytes)
    }
}

/// Shorthand for `PklRenderer.render(root)`.
pub fn render<N: Render + ?Sized>(root: &N) -> Result<String> {
    PklRenderer.render(root)
}
