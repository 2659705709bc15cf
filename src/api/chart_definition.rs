use serde::{Deserialize, Serialize};

use crate::core::{ChartSize, ColorMode, Dataset, Dimension, PropBag};
use crate::error::ChartResult;
use crate::render::VisualNode;

use super::area_chart::{AreaChart, AreaSeries};
use super::axis_config::AxisOptions;
use super::bar_chart::{BarChart, BarSeries};
use super::legend::LegendConfig;
use super::line_chart::{LineChart, LineSeries};
use super::pie_chart::PieChart;
use super::series::SeriesLabel;
use super::{ChartBuilder, ChartKind, ChartLayout, RootOptions};

/// Serializable chart setup, replayed through the public builder API.
///
/// Fields left out of a JSON definition take the same defaults as a fresh
/// builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartDefinition {
    Area(AreaDefinition),
    Bar(BarDefinition),
    Line(LineDefinition),
    Pie(PieDefinition),
}

impl ChartDefinition {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Area(_) => ChartKind::Area,
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Pie(_) => ChartKind::Pie,
        }
    }

    #[must_use]
    pub fn into_builder(self) -> Box<dyn ChartBuilder> {
        match self {
            Self::Area(definition) => Box::new(definition.into_builder()),
            Self::Bar(definition) => Box::new(definition.into_builder()),
            Self::Line(definition) => Box::new(definition.into_builder()),
            Self::Pie(definition) => Box::new(definition.into_builder()),
        }
    }

    pub fn compile(&self) -> ChartResult<VisualNode> {
        self.clone().into_builder().compile()
    }
}

/// Settings every chart kind shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonDefinition {
    pub data: Dataset,
    pub tooltip: bool,
    pub size: ChartSize,
    pub root: RootOptions,
    pub legend: Option<LegendConfig>,
    pub color_mode: ColorMode,
    pub children: Vec<VisualNode>,
}

impl Default for CommonDefinition {
    fn default() -> Self {
        Self {
            data: Dataset::default(),
            tooltip: true,
            size: ChartSize::default(),
            root: RootOptions::default(),
            legend: None,
            color_mode: ColorMode::default(),
            children: Vec::new(),
        }
    }
}

/// An axis toggle plus its options. Omitting the axis entirely keeps the
/// builder default (category shown, value hidden).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDefinition {
    #[serde(default = "shown_by_default")]
    pub show: bool,
    #[serde(default)]
    pub options: AxisOptions,
}

fn shown_by_default() -> bool {
    true
}

/// Category key, axes and grid of area, bar and line charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartesianDefinition {
    pub category_key: Option<String>,
    pub category_axis: Option<AxisDefinition>,
    pub value_axis: Option<AxisDefinition>,
    pub grid: bool,
}

impl Default for CartesianDefinition {
    fn default() -> Self {
        Self {
            category_key: None,
            category_axis: None,
            value_axis: None,
            grid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaDefinition {
    #[serde(flatten)]
    pub common: CommonDefinition,
    #[serde(flatten)]
    pub cartesian: CartesianDefinition,
    pub series: Vec<AreaSeries>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarDefinition {
    #[serde(flatten)]
    pub common: CommonDefinition,
    #[serde(flatten)]
    pub cartesian: CartesianDefinition,
    pub layout: Option<ChartLayout>,
    pub series: Vec<BarSeries>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDefinition {
    #[serde(flatten)]
    pub common: CommonDefinition,
    #[serde(flatten)]
    pub cartesian: CartesianDefinition,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieDefinition {
    #[serde(flatten)]
    pub common: CommonDefinition,
    pub value_key: Option<String>,
    pub name_key: Option<String>,
    pub colors: Vec<String>,
    pub inner_radius: Option<Dimension>,
    pub outer_radius: Option<Dimension>,
    pub label: SeriesLabel,
    pub label_line: Option<bool>,
    pub label_list: Option<PropBag>,
    pub class_name: Option<String>,
    pub pie_attrs: PropBag,
}

impl Default for PieDefinition {
    fn default() -> Self {
        Self {
            common: CommonDefinition::default(),
            value_key: None,
            name_key: None,
            colors: Vec::new(),
            inner_radius: None,
            outer_radius: None,
            label: SeriesLabel::Toggle(false),
            label_line: None,
            label_list: None,
            class_name: None,
            pie_attrs: PropBag::new(),
        }
    }
}

/// Replays the shared settings onto any builder exposing the common setters.
macro_rules! replay_common {
    ($builder:expr, $common:expr) => {{
        let common = $common;
        let mut builder = $builder
            .set_tooltip_visible(common.tooltip)
            .set_size(common.size.width, common.size.height)
            .configure_root(common.root)
            .set_color_mode(common.color_mode)
            .append_children(common.children);
        if let Some(legend) = common.legend {
            builder = builder.set_custom_legend(legend.labels, legend.position);
        }
        builder
    }};
}

/// Replays category key, axes and grid onto a cartesian builder.
macro_rules! replay_cartesian {
    ($builder:expr, $cartesian:expr) => {{
        let cartesian = $cartesian;
        let mut builder = $builder.set_grid_visible(cartesian.grid);
        if let Some(key) = cartesian.category_key {
            builder = builder.set_category_axis_key(key);
        }
        if let Some(axis) = cartesian.category_axis {
            builder = builder.configure_category_axis(axis.show, axis.options);
        }
        if let Some(axis) = cartesian.value_axis {
            builder = builder.configure_value_axis(axis.show, axis.options);
        }
        builder
    }};
}

impl AreaDefinition {
    #[must_use]
    pub fn into_builder(self) -> AreaChart {
        let chart = AreaChart::new(self.common.data.clone());
        let chart = replay_cartesian!(replay_common!(chart, self.common), self.cartesian);
        self.series
            .into_iter()
            .fold(chart, |chart, series| chart.add_series(series))
    }
}

impl BarDefinition {
    #[must_use]
    pub fn into_builder(self) -> BarChart {
        let mut chart = BarChart::new(self.common.data.clone());
        if let Some(layout) = self.layout {
            chart = chart.set_layout(layout);
        }
        let chart = replay_cartesian!(replay_common!(chart, self.common), self.cartesian);
        self.series
            .into_iter()
            .fold(chart, |chart, series| chart.add_series(series))
    }
}

impl LineDefinition {
    #[must_use]
    pub fn into_builder(self) -> LineChart {
        let chart = LineChart::new(self.common.data.clone());
        let chart = replay_cartesian!(replay_common!(chart, self.common), self.cartesian);
        self.series
            .into_iter()
            .fold(chart, |chart, series| chart.add_series(series))
    }
}

impl PieDefinition {
    #[must_use]
    pub fn into_builder(self) -> PieChart {
        let mut chart = PieChart::new(self.common.data.clone());
        if let Some(value_key) = self.value_key {
            chart = chart.set_value_key(value_key);
        }
        if let Some(name_key) = self.name_key {
            chart = chart.set_name_key(name_key);
        }
        let mut chart = chart
            .set_colors(self.colors)
            .set_radius(self.inner_radius, self.outer_radius)
            .set_label(self.label, self.label_line)
            .set_pie_attrs(self.pie_attrs);
        if let Some(props) = self.label_list {
            chart = chart.set_label_list(props);
        }
        if let Some(class_name) = self.class_name {
            chart = chart.set_class_name(class_name);
        }
        replay_common!(chart, self.common)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn omitted_fields_take_builder_defaults() {
        let definition: ChartDefinition =
            serde_json::from_value(json!({"kind": "line", "category_key": "month"})).unwrap();
        let ChartDefinition::Line(line) = &definition else {
            panic!("expected a line definition");
        };
        assert!(line.common.tooltip);
        assert!(line.cartesian.grid);
        assert_eq!(line.common.size, ChartSize::default());
        assert_eq!(definition.kind(), ChartKind::Line);
    }

    #[test]
    fn pie_without_name_key_fails_on_value_key_first() {
        let definition: ChartDefinition =
            serde_json::from_value(json!({"kind": "pie", "name_key": "browser"})).unwrap();
        let err = definition.compile().unwrap_err();
        assert!(err.to_string().contains("value key"));
    }
}
