use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::props::{insert_present, merge_passthrough};
use crate::core::{Dimension, PropBag};

/// Orientation of a cartesian chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartLayout {
    #[default]
    Horizontal,
    Vertical,
}

impl ChartLayout {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// Parses a Recharts layout name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Offset mode used when series are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackOffset {
    Expand,
    None,
    Wiggle,
    Silhouette,
    Sign,
    Positive,
}

impl StackOffset {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expand => "expand",
            Self::None => "none",
            Self::Wiggle => "wiggle",
            Self::Silhouette => "silhouette",
            Self::Sign => "sign",
            Self::Positive => "positive",
        }
    }
}

/// How charts sharing a `sync_id` match their tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMethod {
    Index,
    Value,
}

impl SyncMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Value => "value",
        }
    }
}

/// Plot margins in pixels; unset sides are left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
    pub left: Option<i32>,
}

impl Margin {
    #[must_use]
    pub fn left(left: i32) -> Self {
        Self {
            left: Some(left),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn uniform(px: i32) -> Self {
        Self {
            top: Some(px),
            right: Some(px),
            bottom: Some(px),
            left: Some(px),
        }
    }

    fn to_value(self) -> Value {
        let mut sides = Map::new();
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if let Some(value) = value {
                sides.insert(side.to_owned(), Value::from(value));
            }
        }
        Value::Object(sides)
    }
}

/// Options merged into the chart root node.
///
/// Only options that were set reach the root; a `null` passthrough attribute
/// removes a previously merged option.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RootOptions {
    pub sync_id: Option<String>,
    pub sync_method: Option<SyncMethod>,
    pub layout: Option<ChartLayout>,
    pub margin: Option<Margin>,
    pub stack_offset: Option<StackOffset>,
    pub reverse_stack_order: Option<bool>,
    pub bar_gap: Option<Dimension>,
    pub bar_category_gap: Option<Dimension>,
    pub max_bar_size: Option<u32>,
    pub attrs: PropBag,
}

impl RootOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sync_id(mut self, sync_id: impl Into<String>) -> Self {
        self.sync_id = Some(sync_id.into());
        self
    }

    #[must_use]
    pub fn with_sync_method(mut self, sync_method: SyncMethod) -> Self {
        self.sync_method = Some(sync_method);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    #[must_use]
    pub fn with_stack_offset(mut self, stack_offset: StackOffset) -> Self {
        self.stack_offset = Some(stack_offset);
        self
    }

    #[must_use]
    pub fn with_reverse_stack_order(mut self, reverse: bool) -> Self {
        self.reverse_stack_order = Some(reverse);
        self
    }

    #[must_use]
    pub fn with_bar_gap(mut self, gap: impl Into<Dimension>) -> Self {
        self.bar_gap = Some(gap.into());
        self
    }

    #[must_use]
    pub fn with_bar_category_gap(mut self, gap: impl Into<Dimension>) -> Self {
        self.bar_category_gap = Some(gap.into());
        self
    }

    #[must_use]
    pub fn with_max_bar_size(mut self, max_bar_size: u32) -> Self {
        self.max_bar_size = Some(max_bar_size);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Merges the set options into an accumulated root-options bag.
    pub(crate) fn merge_into(&self, bag: &mut PropBag) {
        insert_present(bag, "syncId", self.sync_id.as_deref());
        insert_present(bag, "syncMethod", self.sync_method.map(SyncMethod::as_str));
        insert_present(bag, "layout", self.layout.map(ChartLayout::as_str));
        insert_present(bag, "margin", self.margin.map(Margin::to_value));
        insert_present(bag, "stackOffset", self.stack_offset.map(StackOffset::as_str));
        insert_present(bag, "reverseStackOrder", self.reverse_stack_order);
        insert_present(bag, "barGap", self.bar_gap.as_ref().map(Dimension::to_value));
        insert_present(
            bag,
            "barCategoryGap",
            self.bar_category_gap.as_ref().map(Dimension::to_value),
        );
        insert_present(bag, "maxBarSize", self.max_bar_size);
        merge_passthrough(bag, &self.attrs);
    }
}
