use crate::error::ChartResult;
use crate::render::{NodeKind, Renderer, VisualNode};

/// No-op renderer used by tests and headless usage.
///
/// It records the shape of the last tree so callers can check what would have
/// been handed to a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_node_count: usize,
    pub last_root_kind: Option<NodeKind>,
    pub render_calls: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, tree: &VisualNode) -> ChartResult<()> {
        self.last_node_count = tree.node_count();
        self.last_root_kind = Some(tree.kind.clone());
        self.render_calls += 1;
        Ok(())
    }
}
