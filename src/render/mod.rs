mod node;
mod null_renderer;

pub use node::{NodeKind, VisualNode};
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully compiled, deterministic `VisualNode` tree so
/// drawing code stays isolated from builder configuration logic.
pub trait Renderer {
    fn render(&mut self, tree: &VisualNode) -> ChartResult<()>;
}
