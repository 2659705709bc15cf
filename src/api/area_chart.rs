use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::props::insert_present;
use crate::core::{
    ChartSize, ColorMode, Dataset, Dimension, PropBag, gradient_reference,
    resolve_color_reference,
};
use crate::error::ChartResult;
use crate::render::{NodeKind, VisualNode};

use super::axis_config::{AxisOptions, VALUE_AXIS_DEFAULTS};
use super::chart_state::{AxisPlacement, CartesianState, ChartState};
use super::legend::LegendPosition;
use super::series::{AxisId, CurveType, SeriesEntry, SeriesLabel, default_series_color};
use super::validation::require_key;
use super::{ChartBuilder, ChartKind, RootOptions};

/// Options for one area series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaSeries {
    pub key: String,
    /// Theme token (`chart-2`) or resolved CSS color.
    pub color: String,
    /// Stroke override; defaults to the resolved color.
    pub stroke: Option<String>,
    /// Fill with a per-series vertical gradient instead of a flat color.
    pub gradient: bool,
    pub curve: Option<CurveType>,
    pub stack_id: Option<String>,
    pub x_axis_id: Option<AxisId>,
    pub y_axis_id: Option<AxisId>,
    pub dot: Option<bool>,
    pub active_dot: Option<bool>,
    pub stroke_width: Option<u32>,
    pub connect_nulls: Option<bool>,
    pub animate: Option<bool>,
    pub label: Option<SeriesLabel>,
    pub attrs: PropBag,
}

impl Default for AreaSeries {
    fn default() -> Self {
        Self {
            key: String::new(),
            color: default_series_color(),
            stroke: None,
            gradient: false,
            curve: None,
            stack_id: None,
            x_axis_id: None,
            y_axis_id: None,
            dot: None,
            active_dot: None,
            stroke_width: None,
            connect_nulls: None,
            animate: None,
            label: None,
            attrs: PropBag::new(),
        }
    }
}

impl AreaSeries {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveType) -> Self {
        self.curve = Some(curve);
        self
    }

    #[must_use]
    pub fn with_stack_id(mut self, stack_id: impl Into<String>) -> Self {
        self.stack_id = Some(stack_id.into());
        self
    }

    #[must_use]
    pub fn with_x_axis_id(mut self, id: impl Into<AxisId>) -> Self {
        self.x_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_id(mut self, id: impl Into<AxisId>) -> Self {
        self.y_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_dot(mut self, dot: bool) -> Self {
        self.dot = Some(dot);
        self
    }

    #[must_use]
    pub fn with_active_dot(mut self, active_dot: bool) -> Self {
        self.active_dot = Some(active_dot);
        self
    }

    /// Unset emits `1`; an explicit `0` is kept.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    #[must_use]
    pub fn with_connect_nulls(mut self, connect_nulls: bool) -> Self {
        self.connect_nulls = Some(connect_nulls);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = Some(animate);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<SeriesLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    fn into_entry(self) -> SeriesEntry {
        let color = resolve_color_reference(&self.color);
        let stroke = self
            .stroke
            .as_deref()
            .map_or_else(|| color.clone(), resolve_color_reference);
        let fill = if self.gradient {
            gradient_reference(&self.key)
        } else {
            color
        };

        let mut props = PropBag::new();
        props.insert("dataKey".to_owned(), Value::from(self.key.as_str()));
        props.insert("stroke".to_owned(), Value::from(stroke));
        props.insert(
            "strokeWidth".to_owned(),
            Value::from(self.stroke_width.unwrap_or(1)),
        );
        props.insert("fill".to_owned(), Value::from(fill));
        insert_present(&mut props, "type", self.curve.map(CurveType::as_str));
        insert_present(&mut props, "stackId", self.stack_id);
        insert_present(&mut props, "xAxisId", self.x_axis_id);
        insert_present(&mut props, "yAxisId", self.y_axis_id);
        insert_present(&mut props, "dot", self.dot);
        insert_present(&mut props, "activeDot", self.active_dot);
        insert_present(&mut props, "connectNulls", self.connect_nulls);
        props.insert(
            "isAnimationActive".to_owned(),
            Value::from(self.animate.unwrap_or(true)),
        );

        SeriesEntry::assemble(
            NodeKind::Area,
            self.key,
            props,
            &self.attrs,
            self.label,
            "stroke",
            self.gradient,
        )
    }
}

impl From<&str> for AreaSeries {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AreaSeries {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// Fluent builder for area charts.
///
/// ```
/// use buridan_charts::api::{AreaChart, AreaSeries};
/// use buridan_charts::core::Dataset;
/// use serde_json::json;
///
/// let data = Dataset::from_json_value(json!([
///     {"month": "Jan", "desktop": 186},
///     {"month": "Feb", "desktop": 305},
/// ]))
/// .expect("dataset");
///
/// let tree = AreaChart::new(data)
///     .set_category_axis_key("month")
///     .add_series(AreaSeries::new("desktop").with_gradient(true))
///     .compile()
///     .expect("compile");
/// assert_eq!(tree.kind.tag(), "AreaChart");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AreaChart {
    chart: ChartState,
    cartesian: CartesianState,
}

impl AreaChart {
    #[must_use]
    pub fn new(data: impl Into<Dataset>) -> Self {
        Self {
            chart: ChartState::new(data.into()),
            cartesian: CartesianState::new(VALUE_AXIS_DEFAULTS),
        }
    }

    /// Field used for the category (X) axis. Required before compiling.
    #[must_use]
    pub fn set_category_axis_key(mut self, key: impl Into<String>) -> Self {
        self.cartesian.category_key = Some(key.into());
        self
    }

    /// Appends one series; series render in insertion order.
    #[must_use]
    pub fn add_series(mut self, series: impl Into<AreaSeries>) -> Self {
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

    #[must_use]
    pub fn configure_root(mut self, options: RootOptions) -> Self {
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
    pub fn series_keys(&self) -> Vec<&str> {
        self.cartesian
            .series
            .iter()
            .map(|entry| entry.key.as_str())
            .collect()
    }

    pub fn compile(&self) -> ChartResult<VisualNode> {
        self.compile_with(PropBag::new())
    }

    pub fn compile_with(&self, overrides: PropBag) -> ChartResult<VisualNode> {
        let category_key = require_key(
            ChartKind::Area,
            "category",
            self.cartesian.category_key.as_deref(),
        )?;
        Ok(self.cartesian.assemble(
            ChartKind::Area,
            category_key,
            &self.chart,
            &AxisPlacement::standard(),
            None,
            &overrides,
        ))
    }
}

impl ChartBuilder for AreaChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Area
    }

    fn compile_with(&self, overrides: PropBag) -> ChartResult<VisualNode> {
        AreaChart::compile_with(self, overrides)
    }
}
