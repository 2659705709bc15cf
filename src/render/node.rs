use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::PropBag;

/// Type of one node in a compiled chart tree.
///
/// Tags match the component names the Recharts renderer expects, plus the SVG
/// elements used for gradients and a few layout primitives for legends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    AreaChart,
    BarChart,
    LineChart,
    PieChart,
    Area,
    Bar,
    Line,
    Pie,
    Cell,
    LabelList,
    XAxis,
    YAxis,
    CartesianGrid,
    Tooltip,
    Defs,
    LinearGradient,
    GradientStop,
    Box,
    HStack,
    Text,
    /// Caller supplied node type, passed through untouched.
    Custom(String),
}

impl NodeKind {
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::AreaChart => "AreaChart",
            Self::BarChart => "BarChart",
            Self::LineChart => "LineChart",
            Self::PieChart => "PieChart",
            Self::Area => "Area",
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::Pie => "Pie",
            Self::Cell => "Cell",
            Self::LabelList => "LabelList",
            Self::XAxis => "XAxis",
            Self::YAxis => "YAxis",
            Self::CartesianGrid => "CartesianGrid",
            Self::Tooltip => "Tooltip",
            Self::Defs => "defs",
            Self::LinearGradient => "linearGradient",
            Self::GradientStop => "stop",
            Self::Box => "Box",
            Self::HStack => "HStack",
            Self::Text => "Text",
            Self::Custom(tag) => tag,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "AreaChart" => Self::AreaChart,
            "BarChart" => Self::BarChart,
            "LineChart" => Self::LineChart,
            "PieChart" => Self::PieChart,
            "Area" => Self::Area,
            "Bar" => Self::Bar,
            "Line" => Self::Line,
            "Pie" => Self::Pie,
            "Cell" => Self::Cell,
            "LabelList" => Self::LabelList,
            "XAxis" => Self::XAxis,
            "YAxis" => Self::YAxis,
            "CartesianGrid" => Self::CartesianGrid,
            "Tooltip" => Self::Tooltip,
            "defs" => Self::Defs,
            "linearGradient" => Self::LinearGradient,
            "stop" => Self::GradientStop,
            "Box" => Self::Box,
            "HStack" => Self::HStack,
            "Text" => Self::Text,
            _ => Self::Custom(tag),
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Custom(tag) => tag,
            other => other.tag().to_owned(),
        }
    }
}

/// One node of a compiled chart tree.
///
/// Trees are plain data: backends walk them, tests compare them with `==`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "PropBag::is_empty")]
    pub props: PropBag,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl VisualNode {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            props: PropBag::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Node with a caller chosen type name.
    #[must_use]
    pub fn custom(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::from(tag.into()))
    }

    #[must_use]
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_props(mut self, props: PropBag) -> Self {
        self.props.extend(props);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = VisualNode>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    /// Kinds of the direct children, in order.
    #[must_use]
    pub fn child_kinds(&self) -> Vec<&NodeKind> {
        self.children.iter().map(|child| &child.kind).collect()
    }

    /// First direct child of the given kind.
    #[must_use]
    pub fn child(&self, kind: &NodeKind) -> Option<&VisualNode> {
        self.children.iter().find(|child| &child.kind == kind)
    }

    /// Direct children of the given kind, in order.
    #[must_use]
    pub fn children_of(&self, kind: &NodeKind) -> Vec<&VisualNode> {
        self.children
            .iter()
            .filter(|child| &child.kind == kind)
            .collect()
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(VisualNode::node_count)
            .sum::<usize>()
    }
}
