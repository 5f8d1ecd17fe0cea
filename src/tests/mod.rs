use crate::renderer::{Render, RenderContext};

mod declaration_tests;
mod object_tests;

/// Render at depth zero, panicking on precondition failures.
fn render_str<N: Render>(node: &N) -> String {
    render_at(node, 0)
}

fn render_at<N: Render>(node: &N, depth: usize) -> String {
    node.render(&RenderContext::new().with_depth(depth))
        .expect("node should render")
}
