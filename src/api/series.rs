use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::core::PropBag;
use crate::core::props::merge_passthrough;
use crate::render::{NodeKind, VisualNode};

pub(crate) const DEFAULT_SERIES_COLOR: &str = "chart-1";

pub(crate) fn default_series_color() -> String {
    DEFAULT_SERIES_COLOR.to_owned()
}

/// Label configuration attached to a series (or to the pie node).
///
/// `Toggle(true)` yields a default label list, `Toggle(false)` yields none and
/// `Props` yields a label list carrying the given properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesLabel {
    Toggle(bool),
    Props(PropBag),
}

impl SeriesLabel {
    /// Interprets a raw passthrough `label` value.
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(enabled) => Some(Self::Toggle(enabled)),
            Value::Object(map) => Some(Self::Props(map.into_iter().collect())),
            _ => None,
        }
    }

    /// Label list child node, if this label produces one.
    #[must_use]
    pub fn label_list_node(&self) -> Option<VisualNode> {
        match self {
            Self::Toggle(true) => Some(VisualNode::new(NodeKind::LabelList)),
            Self::Toggle(false) => None,
            Self::Props(props) => {
                Some(VisualNode::new(NodeKind::LabelList).with_props(props.clone()))
            }
        }
    }
}

impl From<bool> for SeriesLabel {
    fn from(enabled: bool) -> Self {
        Self::Toggle(enabled)
    }
}

impl From<PropBag> for SeriesLabel {
    fn from(props: PropBag) -> Self {
        Self::Props(props)
    }
}

/// Interpolation used between points of an area or line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveType {
    Basis,
    BasisClosed,
    BasisOpen,
    BumpX,
    BumpY,
    Linear,
    LinearClosed,
    Natural,
    MonotoneX,
    MonotoneY,
    Monotone,
    Step,
    StepBefore,
    StepAfter,
}

impl CurveType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basis => "basis",
            Self::BasisClosed => "basisClosed",
            Self::BasisOpen => "basisOpen",
            Self::BumpX => "bumpX",
            Self::BumpY => "bumpY",
            Self::Linear => "linear",
            Self::LinearClosed => "linearClosed",
            Self::Natural => "natural",
            Self::MonotoneX => "monotoneX",
            Self::MonotoneY => "monotoneY",
            Self::Monotone => "monotone",
            Self::Step => "step",
            Self::StepBefore => "stepBefore",
            Self::StepAfter => "stepAfter",
        }
    }
}

/// Axis reference used by series bound to a non-default axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisId {
    Index(u32),
    Name(String),
}

impl From<u32> for AxisId {
    fn from(index: u32) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for AxisId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<AxisId> for Value {
    fn from(id: AxisId) -> Self {
        match id {
            AxisId::Index(index) => Value::from(index),
            AxisId::Name(name) => Value::from(name),
        }
    }
}

/// Resolved, immutable series record stored by cartesian builders.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SeriesEntry {
    pub(crate) key: String,
    pub(crate) node_kind: NodeKind,
    pub(crate) props: PropBag,
    pub(crate) label: Option<SeriesLabel>,
    /// Color shown next to this series in a custom legend.
    pub(crate) swatch_color: String,
    /// Stop color of the gradient definition, when the series uses one.
    pub(crate) gradient_stroke: Option<String>,
}

impl SeriesEntry {
    /// Finishes a series record: merges passthrough attributes over the typed
    /// properties, drops unset (`null`) keys and lifts a passthrough `label`
    /// out of the property bag.
    ///
    /// The legend swatch is read back from the merged `swatch_prop` so a
    /// passthrough color reaches the legend and the gradient stops. When that
    /// key was unset, the typed value is used instead.
    pub(crate) fn assemble(
        node_kind: NodeKind,
        key: String,
        mut props: PropBag,
        attrs: &PropBag,
        label: Option<SeriesLabel>,
        swatch_prop: &str,
        gradient: bool,
    ) -> Self {
        let typed_color = color_string(props.get(swatch_prop));
        merge_passthrough(&mut props, attrs);
        let passthrough_label = props
            .shift_remove("label")
            .and_then(SeriesLabel::from_value);
        let label = passthrough_label.or(label);
        let swatch_color = color_string(props.get(swatch_prop))
            .or(typed_color)
            .unwrap_or_default();
        let gradient_stroke = gradient.then(|| swatch_color.clone());
        trace!(
            series = %key,
            kind = node_kind.tag(),
            prop_count = props.len(),
            gradient = gradient_stroke.is_some(),
            "store series"
        );
        Self {
            key,
            node_kind,
            props,
            label,
            swatch_color,
            gradient_stroke,
        }
    }

    pub(crate) fn to_node(&self) -> VisualNode {
        VisualNode::new(self.node_kind.clone())
            .with_props(self.props.clone())
            .with_children(self.label.as_ref().and_then(SeriesLabel::label_list_node))
    }
}

fn color_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}
