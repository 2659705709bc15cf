use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PropBag;
use crate::error::ChartResult;
use crate::render::{NodeKind, Renderer, VisualNode};

/// The four chart families a builder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Area,
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }

    /// Node type of the compiled chart root.
    #[must_use]
    pub fn root_node_kind(self) -> NodeKind {
        match self {
            Self::Area => NodeKind::AreaChart,
            Self::Bar => NodeKind::BarChart,
            Self::Line => NodeKind::LineChart,
            Self::Pie => NodeKind::PieChart,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal step shared by every chart builder.
///
/// Compiling is a pure function of the builder state: it never consumes or
/// resets configuration, so compiling twice yields equal trees.
pub trait ChartBuilder {
    fn kind(&self) -> ChartKind;

    /// Compiles the chart, merging `overrides` into the root node last.
    fn compile_with(&self, overrides: PropBag) -> ChartResult<VisualNode>;

    fn compile(&self) -> ChartResult<VisualNode> {
        self.compile_with(PropBag::new())
    }

    /// Compiles the chart and hands the tree to `renderer`.
    fn render_into(&self, renderer: &mut dyn Renderer) -> ChartResult<()> {
        let tree = self.compile()?;
        renderer.render(&tree)
    }
}
