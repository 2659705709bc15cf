use serde_json::Value;
use tracing::{debug, trace};

use crate::core::props::merge_passthrough;
use crate::core::{ChartSize, ColorMode, Dataset, PropBag};
use crate::render::{NodeKind, VisualNode};

use super::axis_config::{
    AxisDefaults, AxisOptions, AxisSlot, AxisType, CATEGORY_AXIS_DEFAULTS,
};
use super::chrome::{gradient_definitions, grid_node, tooltip_node};
use super::legend::{LegendConfig, LegendPosition};
use super::series::SeriesEntry;
use super::{ChartKind, RootOptions};

/// State shared by all four builders.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartState {
    pub(crate) data: Dataset,
    pub(crate) show_tooltip: bool,
    pub(crate) size: ChartSize,
    pub(crate) root_options: PropBag,
    pub(crate) legend: Option<LegendConfig>,
    pub(crate) children: Vec<VisualNode>,
    pub(crate) color_mode: ColorMode,
}

impl ChartState {
    pub(crate) fn new(data: Dataset) -> Self {
        Self {
            data,
            show_tooltip: true,
            size: ChartSize::default(),
            root_options: PropBag::new(),
            legend: None,
            children: Vec::new(),
            color_mode: ColorMode::default(),
        }
    }

    pub(crate) fn merge_root_options(&mut self, options: &RootOptions) {
        options.merge_into(&mut self.root_options);
    }

    pub(crate) fn set_legend<I, K, V>(&mut self, labels: I, position: LegendPosition)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.legend = Some(LegendConfig::new(labels, position));
    }

    pub(crate) fn append_children(&mut self, nodes: impl IntoIterator<Item = VisualNode>) {
        let before = self.children.len();
        self.children.extend(nodes);
        trace!(
            appended = self.children.len() - before,
            total = self.children.len(),
            "append caller nodes"
        );
    }

    /// Custom legend, if one is set and has at least one label.
    pub(crate) fn active_legend(&self) -> Option<&LegendConfig> {
        self.legend.as_ref().filter(|legend| legend.is_active())
    }

    /// Root chart node: dataset, optional layout, size, stored root options,
    /// then compile overrides (which win on key collisions). A `null`
    /// override drops the key from the root.
    pub(crate) fn root_node(
        &self,
        kind: ChartKind,
        children: Vec<VisualNode>,
        layout: Option<&str>,
        overrides: &PropBag,
    ) -> VisualNode {
        let mut props = PropBag::new();
        props.insert("data".to_owned(), self.data.to_value());
        if let Some(layout) = layout {
            props.insert("layout".to_owned(), Value::from(layout));
        }
        props.insert("width".to_owned(), self.size.width.to_value());
        props.insert("height".to_owned(), Value::from(self.size.height));
        props.extend(self.root_options.clone());
        merge_passthrough(&mut props, overrides);
        VisualNode::new(kind.root_node_kind())
            .with_props(props)
            .with_children(children)
    }
}

/// Geometry of the two axis roles for one compile.
#[derive(Debug, Clone)]
pub(crate) struct AxisPlacement {
    pub(crate) category: NodeKind,
    pub(crate) category_default_type: Option<AxisType>,
    pub(crate) value: NodeKind,
    pub(crate) value_default_type: Option<AxisType>,
}

impl AxisPlacement {
    pub(crate) fn standard() -> Self {
        Self {
            category: NodeKind::XAxis,
            category_default_type: None,
            value: NodeKind::YAxis,
            value_default_type: None,
        }
    }
}

/// Series, axes and grid state shared by area, bar and line builders.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CartesianState {
    pub(crate) category_key: Option<String>,
    pub(crate) series: Vec<SeriesEntry>,
    pub(crate) category_axis: AxisSlot,
    pub(crate) value_axis: AxisSlot,
    pub(crate) value_axis_defaults: AxisDefaults,
    pub(crate) show_grid: bool,
}

impl CartesianState {
    pub(crate) fn new(value_axis_defaults: AxisDefaults) -> Self {
        Self {
            category_key: None,
            series: Vec::new(),
            category_axis: AxisSlot::default_category(),
            value_axis: AxisSlot::Hidden,
            value_axis_defaults,
            show_grid: true,
        }
    }

    pub(crate) fn configure_category_axis(&mut self, show: bool, options: AxisOptions) {
        self.category_axis = AxisSlot::configure(show, options, CATEGORY_AXIS_DEFAULTS);
    }

    pub(crate) fn configure_value_axis(&mut self, show: bool, options: AxisOptions) {
        self.value_axis = AxisSlot::configure(show, options, self.value_axis_defaults);
    }

    /// Lowers the configuration into the chart root (plus legend wrapper).
    ///
    /// Child order is part of the output contract: gradient defs, tooltip,
    /// grid, value axis, series in insertion order, category axis, caller
    /// nodes. Callers validate required keys before calling this.
    pub(crate) fn assemble(
        &self,
        kind: ChartKind,
        category_key: &str,
        chart: &ChartState,
        placement: &AxisPlacement,
        layout: Option<&str>,
        overrides: &PropBag,
    ) -> VisualNode {
        let mut children = Vec::with_capacity(self.series.len() + chart.children.len() + 5);

        if let Some(defs) = gradient_definitions(&self.series) {
            children.push(defs);
        }
        if chart.show_tooltip {
            children.push(tooltip_node(chart.color_mode));
        }
        if self.show_grid {
            children.push(grid_node());
        }
        if let Some(axis) = self.value_axis.shown() {
            children.push(axis.to_node(
                placement.value.clone(),
                None,
                placement.value_default_type,
            ));
        }
        children.extend(self.series.iter().map(SeriesEntry::to_node));
        if let Some(axis) = self.category_axis.shown() {
            children.push(axis.to_node(
                placement.category.clone(),
                Some(category_key),
                placement.category_default_type,
            ));
        }
        children.extend(chart.children.iter().cloned());

        let child_count = children.len();
        let root = chart.root_node(kind, children, layout, overrides);
        let legend = chart.active_legend();
        debug!(
            chart = %kind,
            series = self.series.len(),
            children = child_count,
            legend = legend.is_some(),
            "compile chart"
        );

        match legend {
            Some(legend) => {
                let strip = legend.series_strip(&self.series);
                legend.wrap(root, strip)
            }
            None => root,
        }
    }
}
