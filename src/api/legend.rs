use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::scale_color;
use crate::render::{NodeKind, VisualNode};

use super::series::SeriesEntry;

const LEGEND_STRIP_CLASS: &str = "justify-center gap-4 py-2";
const PIE_LEGEND_STRIP_CLASS: &str = "justify-center gap-4 py-2 flex flex-wrap";

/// Where a custom legend sits relative to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
}

/// Custom legend: display labels keyed by series key, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegendConfig {
    pub labels: IndexMap<String, String>,
    #[serde(default)]
    pub position: LegendPosition,
}

impl LegendConfig {
    #[must_use]
    pub fn new<I, K, V>(labels: I, position: LegendPosition) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
            position,
        }
    }

    /// An empty label mapping renders no legend at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Display label for `series_key`, falling back to the key itself.
    #[must_use]
    pub fn label_for<'a>(&'a self, series_key: &'a str) -> &'a str {
        match self.labels.get(series_key) {
            Some(label) => label.as_str(),
            None => {
                debug!(series = series_key, "legend label missing, using series key");
                series_key
            }
        }
    }

    /// Wraps `chart` and its legend strip in a vertical flex container.
    pub(crate) fn wrap(&self, chart: VisualNode, legend: VisualNode) -> VisualNode {
        let ordered = match self.position {
            LegendPosition::Top => [legend, chart],
            LegendPosition::Bottom => [chart, legend],
        };
        VisualNode::new(NodeKind::Box)
            .with_prop("className", "w-full flex flex-col")
            .with_children(ordered)
    }

    /// Legend strip with one row per series, in series order.
    pub(crate) fn series_strip(&self, series: &[SeriesEntry]) -> VisualNode {
        legend_strip(
            series
                .iter()
                .map(|entry| legend_item(&entry.swatch_color, self.label_for(&entry.key))),
            LEGEND_STRIP_CLASS,
        )
    }

    /// Legend strip pairing labels positionally with palette colors. Colors
    /// without a label use the color value itself as label.
    pub(crate) fn palette_strip(&self, colors: &[String]) -> VisualNode {
        if colors.len() != self.labels.len() {
            debug!(
                colors = colors.len(),
                labels = self.labels.len(),
                "pie legend label count differs from palette size"
            );
        }
        let mut labels = self.labels.values();
        legend_strip(
            colors.iter().map(|color| {
                let label = labels.next().map_or(color.as_str(), String::as_str);
                legend_item(color, label)
            }),
            PIE_LEGEND_STRIP_CLASS,
        )
    }
}

fn legend_item(color: &str, label: &str) -> VisualNode {
    VisualNode::new(NodeKind::HStack)
        .with_prop("spacing", "2")
        .with_prop("align", "center")
        .with_child(
            VisualNode::new(NodeKind::Box)
                .with_prop("bg", color)
                .with_prop("className", "w-3 h-3 rounded-sm"),
        )
        .with_child(
            VisualNode::new(NodeKind::Text)
                .with_prop("className", "text-sm font-semibold")
                .with_prop("color", scale_color("slate", 11))
                .with_text(label),
        )
}

fn legend_strip(items: impl IntoIterator<Item = VisualNode>, class_name: &str) -> VisualNode {
    VisualNode::new(NodeKind::HStack)
        .with_prop("className", class_name)
        .with_children(items)
}
