use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::props::insert_present;
use crate::core::{ChartSize, ColorMode, Dataset, Dimension, PropBag, resolve_color_reference};
use crate::error::ChartResult;
use crate::render::{NodeKind, VisualNode};

use super::axis_config::{AxisOptions, AxisType, BAR_VALUE_AXIS_DEFAULTS};
use super::chart_state::{AxisPlacement, CartesianState, ChartState};
use super::legend::LegendPosition;
use super::series::{SeriesEntry, SeriesLabel, default_series_color};
use super::validation::{require_key, require_series};
use super::{ChartBuilder, ChartKind, ChartLayout, RootOptions};

/// Corner rounding of bars: one radius for every corner, or
/// `[top-left, top-right, bottom-right, bottom-left]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarRadius {
    Uniform(u32),
    Corners([u32; 4]),
}

impl From<u32> for BarRadius {
    fn from(radius: u32) -> Self {
        Self::Uniform(radius)
    }
}

impl From<[u32; 4]> for BarRadius {
    fn from(corners: [u32; 4]) -> Self {
        Self::Corners(corners)
    }
}

impl From<BarRadius> for Value {
    fn from(radius: BarRadius) -> Self {
        match radius {
            BarRadius::Uniform(radius) => Value::from(radius),
            BarRadius::Corners(corners) => Value::from(corners.to_vec()),
        }
    }
}

/// Options for one bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSeries {
    pub key: String,
    /// Theme token or resolved CSS color; also used as legend swatch.
    pub fill: String,
    pub stack_id: Option<String>,
    pub radius: Option<BarRadius>,
    pub label: Option<SeriesLabel>,
    pub animate: Option<bool>,
    pub bar_size: Option<u32>,
    pub legend_type: Option<String>,
    pub name: Option<String>,
    pub attrs: PropBag,
}

impl Default for BarSeries {
    fn default() -> Self {
        Self {
            key: String::new(),
            fill: default_series_color(),
            stack_id: None,
            radius: None,
            label: None,
            animate: None,
            bar_size: None,
            legend_type: None,
            name: None,
            attrs: PropBag::new(),
        }
    }
}

impl BarSeries {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    #[must_use]
    pub fn with_stack_id(mut self, stack_id: impl Into<String>) -> Self {
        self.stack_id = Some(stack_id.into());
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: impl Into<BarRadius>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<SeriesLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    #[must_use]
    pub fn with_bar_size(mut self, bar_size: u32) -> Self {
        self.bar_size = Some(bar_size);
        self
    }

    #[must_use]
    pub fn with_legend_type(mut self, legend_type: impl Into<String>) -> Self {
        self.legend_type = Some(legend_type.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    fn into_entry(self) -> SeriesEntry {
        let fill = resolve_color_reference(&self.fill);

        let mut props = PropBag::new();
        props.insert("dataKey".to_owned(), Value::from(self.key.as_str()));
        props.insert("fill".to_owned(), Value::from(fill));
        insert_present(&mut props, "stackId", self.stack_id);
        insert_present(&mut props, "radius", self.radius);
        props.insert(
            "isAnimationActive".to_owned(),
            Value::from(self.animate.unwrap_or(true)),
        );
        insert_present(&mut props, "barSize", self.bar_size);
        insert_present(&mut props, "legendType", self.legend_type);
        insert_present(&mut props, "name", self.name);

        SeriesEntry::assemble(
            NodeKind::Bar,
            self.key,
            props,
            &self.attrs,
            self.label,
            "fill",
            false,
        )
    }
}

impl From<&str> for BarSeries {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for BarSeries {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// Fluent builder for bar charts.
///
/// Unlike area and line charts, a bar chart refuses to compile without at
/// least one series. The layout decides which geometry axis carries the
/// categories: `XAxis` when horizontal, `YAxis` when vertical.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    chart: ChartState,
    cartesian: CartesianState,
    layout: ChartLayout,
}

impl BarChart {
    #[must_use]
    pub fn new(data: impl Into<Dataset>) -> Self {
        Self {
            chart: ChartState::new(data.into()),
            cartesian: CartesianState::new(BAR_VALUE_AXIS_DEFAULTS),
            layout: ChartLayout::default(),
        }
    }

    #[must_use]
    pub fn set_category_axis_key(mut self, key: impl Into<String>) -> Self {
        self.cartesian.category_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn set_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn add_series(mut self, series: impl Into<BarSeries>) -> Self {
        self.cartesian.series.push(series.into().into_entry());
        self
    }

    #[must_use]
    pub fn configure_category_axis(mut self, show: bool, options: AxisOptions) -> Self {
        self.cartesian.configure_category_axis(show, options);
        self
    }

    #[must_use]
    pub fn configure_value_axis(mut self, show: bool, options: AxisOptions) -> Self {
        self.cartesian.configure_value_axis(show, options);
        self
    }

    #[must_use]
    pub fn set_tooltip_visible(mut self, visible: bool) -> Self {
        self.chart.show_tooltip = visible;
        self
    }

    #[must_use]
    pub fn set_grid_visible(mut self, visible: bool) -> Self {
        self.cartesian.show_grid = visible;
        self
    }

    #[must_use]
    pub fn set_size(mut self, width: impl Into<Dimension>, height: u32) -> Self {
        self.chart.size = ChartSize::new(width, height);
        self
    }

    /// Merges root options. A layout given here also drives axis placement.
    #[must_use]
    pub fn configure_root(mut self, options: RootOptions) -> Self {
        if let Some(layout) = options.layout {
            self.layout = layout;
        }
        self.chart.merge_root_options(&options);
        self
    }

    #[must_use]
    pub fn set_custom_legend<I, K, V>(mut self, labels: I, position: LegendPosition) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.chart.set_legend(labels, position);
        self
    }

    #[must_use]
    pub fn append_children(mut self, nodes: impl IntoIterator<Item = VisualNode>) -> Self {
        self.chart.append_children(nodes);
        self
    }

    #[must_use]
    pub fn set_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.chart.color_mode = color_mode;
        self
    }

    #[must_use]
    pub fn data(&self) -> &Dataset {
        &self.chart.data
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn series_keys(&self) -> Vec<&str> {
        self.cartesian
            .series
            .iter()
            .map(|entry| entry.key.as_str())
            .collect()
    }

    fn axis_placement(layout: ChartLayout) -> AxisPlacement {
        match layout {
            ChartLayout::Horizontal => AxisPlacement::standard(),
            ChartLayout::Vertical => AxisPlacement {
                category: NodeKind::YAxis,
                category_default_type: Some(AxisType::Category),
                value: NodeKind::XAxis,
                value_default_type: Some(AxisType::Number),
            },
        }
    }

    pub fn compile(&self) -> ChartResult<VisualNode> {
        self.compile_with(PropBag::new())
    }

    pub fn compile_with(&self, overrides: PropBag) -> ChartResult<VisualNode> {
        let category_key = require_key(
            ChartKind::Bar,
            "category",
            self.cartesian.category_key.as_deref(),
        )?;
        require_series(ChartKind::Bar, self.cartesian.series.len())?;
        // A layout override steers axis placement like a stored layout does.
        let layout = overrides
            .get("layout")
            .and_then(Value::as_str)
            .and_then(ChartLayout::from_name)
            .unwrap_or(self.layout);
        Ok(self.cartesian.assemble(
            ChartKind::Bar,
            category_key,
            &self.chart,
            &Self::axis_placement(layout),
            Some(layout.as_str()),
            &overrides,
        ))
    }
}

impl ChartBuilder for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn compile_with(&self, overrides: PropBag) -> ChartResult<VisualNode> {
        BarChart::compile_with(self, overrides)
    }
}
