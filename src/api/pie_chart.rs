use serde_json::Value;
use tracing::debug;

use crate::core::props::{insert_present, merge_passthrough};
use crate::core::{ChartSize, ColorMode, Dataset, Dimension, PropBag, resolve_color_reference};
use crate::error::ChartResult;
use crate::render::{NodeKind, VisualNode};

use super::chart_state::ChartState;
use super::chrome::tooltip_node;
use super::legend::LegendPosition;
use super::series::SeriesLabel;
use super::validation::require_key;
use super::{ChartBuilder, ChartKind, RootOptions};

/// Fluent builder for pie and donut charts.
///
/// A pie has a single slice series driven by `value_key`/`name_key`; slice
/// colors come from a palette applied positionally as `Cell` children.
///
/// ```
/// use buridan_charts::api::PieChart;
/// use buridan_charts::core::{Dataset, Record};
/// use serde_json::json;
///
/// let row: Record = [
///     ("browser".to_owned(), json!("chrome")),
///     ("visitors".to_owned(), json!(275)),
/// ]
/// .into_iter()
/// .collect();
/// let tree = PieChart::new(Dataset::new(vec![row]))
///     .set_values("visitors", "browser")
///     .set_colors(["chart-1", "chart-2"])
///     .compile()
///     .unwrap();
/// assert_eq!(tree.kind.tag(), "PieChart");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    chart: ChartState,
    value_key: Option<String>,
    name_key: Option<String>,
    colors: Vec<String>,
    inner_radius: Option<Dimension>,
    outer_radius: Option<Dimension>,
    label: SeriesLabel,
    label_line: Option<bool>,
    label_list: Option<PropBag>,
    class_name: Option<String>,
    pie_attrs: PropBag,
}

impl PieChart {
    #[must_use]
    pub fn new(data: impl Into<Dataset>) -> Self {
        Self {
            chart: ChartState::new(data.into()),
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

    /// Sets the numeric field sizing each slice and the field naming it.
    #[must_use]
    pub fn set_values(
        self,
        value_key: impl Into<String>,
        name_key: impl Into<String>,
    ) -> Self {
        self.set_value_key(value_key).set_name_key(name_key)
    }

    #[must_use]
    pub fn set_value_key(mut self, value_key: impl Into<String>) -> Self {
        self.value_key = Some(value_key.into());
        self
    }

    #[must_use]
    pub fn set_name_key(mut self, name_key: impl Into<String>) -> Self {
        self.name_key = Some(name_key.into());
        self
    }

    /// Replaces the slice palette. Entries are theme tokens or CSS colors.
    #[must_use]
    pub fn set_colors<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.colors = palette
            .into_iter()
            .map(|color| resolve_color_reference(color.as_ref()))
            .collect();
        self
    }

    /// Donut radii. `None` leaves the renderer default in place.
    #[must_use]
    pub fn set_radius(mut self, inner: Option<Dimension>, outer: Option<Dimension>) -> Self {
        self.inner_radius = inner;
        self.outer_radius = outer;
        self
    }

    #[must_use]
    pub fn set_label(mut self, label: impl Into<SeriesLabel>, label_line: Option<bool>) -> Self {
        self.label = label.into();
        self.label_line = label_line;
        self
    }

    #[must_use]
    pub fn set_label_list(mut self, props: PropBag) -> Self {
        self.label_list = Some(props);
        self
    }

    #[must_use]
    pub fn set_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Extra properties spread onto the pie node itself.
    #[must_use]
    pub fn set_pie_attrs(mut self, attrs: PropBag) -> Self {
        self.pie_attrs.extend(attrs);
        self
    }

    #[must_use]
    pub fn set_tooltip_visible(mut self, visible: bool) -> Self {
        self.chart.show_tooltip = visible;
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

    /// Legend labels are paired with palette colors by position; the keys
    /// only fix the order.
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
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    fn pie_node(&self, value_key: &str, name_key: &str) -> VisualNode {
        let mut props = PropBag::new();
        props.insert("data".to_owned(), self.chart.data.to_value());
        props.insert("dataKey".to_owned(), Value::from(value_key));
        props.insert("nameKey".to_owned(), Value::from(name_key));
        props.insert("stroke".to_owned(), Value::from("0"));
        let radius = |radius: &Option<Dimension>| radius.as_ref().map(Dimension::to_value);
        insert_present(&mut props, "innerRadius", radius(&self.inner_radius));
        insert_present(&mut props, "outerRadius", radius(&self.outer_radius));
        insert_present(&mut props, "className", self.class_name.as_deref());
        insert_present(&mut props, "labelLine", self.label_line);
        let label_flag = match &self.label {
            SeriesLabel::Toggle(enabled) => *enabled,
            SeriesLabel::Props(_) => true,
        };
        props.insert("label".to_owned(), Value::from(label_flag));
        merge_passthrough(&mut props, &self.pie_attrs);

        let mut children = Vec::with_capacity(self.colors.len() + 2);
        if let Some(label_list) = &self.label_list {
            children.push(VisualNode::new(NodeKind::LabelList).with_props(label_list.clone()));
        }
        if let SeriesLabel::Props(_) = &self.label {
            children.extend(self.label.label_list_node());
        }
        children.extend(
            self.colors
                .iter()
                .map(|color| VisualNode::new(NodeKind::Cell).with_prop("fill", color.as_str())),
        );

        VisualNode::new(NodeKind::Pie)
            .with_props(props)
            .with_children(children)
    }

    pub fn compile(&self) -> ChartResult<VisualNode> {
        self.compile_with(PropBag::new())
    }

    pub fn compile_with(&self, overrides: PropBag) -> ChartResult<VisualNode> {
        let value_key = require_key(ChartKind::Pie, "value", self.value_key.as_deref())?;
        let name_key = require_key(ChartKind::Pie, "name", self.name_key.as_deref())?;

        let mut children = Vec::with_capacity(self.chart.children.len() + 2);
        if self.chart.show_tooltip {
            children.push(tooltip_node(self.chart.color_mode));
        }
        children.push(self.pie_node(value_key, name_key));
        children.extend(self.chart.children.iter().cloned());

        let child_count = children.len();
        let root = self
            .chart
            .root_node(ChartKind::Pie, children, None, &overrides);
        let legend = self.chart.active_legend();
        debug!(
            chart = %ChartKind::Pie,
            colors = self.colors.len(),
            children = child_count,
            legend = legend.is_some(),
            "compile chart"
        );

        Ok(match legend {
            Some(legend) => {
                let strip = legend.palette_strip(&self.colors);
                legend.wrap(root, strip)
            }
            None => root,
        })
    }
}

impl ChartBuilder for PieChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn compile_with(&self, overrides: PropBag) -> ChartResult<VisualNode> {
        PieChart::compile_with(self, overrides)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::prop_bag;

    #[test]
    fn dict_label_enables_flag_and_adds_label_list() {
        let tree = PieChart::new(Dataset::new(Vec::new()))
            .set_values("visitors", "browser")
            .set_label(prop_bag([("position", "outside")]), Some(false))
            .compile()
            .unwrap();

        let pie = tree.child(&NodeKind::Pie).unwrap();
        assert_eq!(pie.prop("label"), Some(&json!(true)));
        assert_eq!(pie.prop("labelLine"), Some(&json!(false)));
        assert_eq!(pie.child_kinds(), vec![&NodeKind::LabelList]);
    }

    #[test]
    fn missing_name_key_is_reported_after_value_key() {
        let err = PieChart::new(Dataset::new(Vec::new())).compile().unwrap_err();
        assert_eq!(err.to_string(), "pie chart: value key must be set before rendering");
    }
}
