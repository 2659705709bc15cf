use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::props::{insert_present, merge_passthrough};
use crate::core::{PropBag, prop_bag};
use crate::render::{NodeKind, VisualNode};

/// Scale type of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    Category,
    Number,
}

impl AxisType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Number => "number",
        }
    }
}

/// Caller overrides for one axis. Unset fields take the role defaults when the
/// axis is enabled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub data_key: Option<String>,
    pub axis_type: Option<AxisType>,
    pub hide: Option<bool>,
    pub axis_line: Option<bool>,
    pub tick_size: Option<u32>,
    pub tick_line: Option<bool>,
    pub min_tick_gap: Option<u32>,
    pub interval: Option<String>,
    /// Attributes spread onto the axis node; defaults to a small font size.
    pub custom_attrs: Option<PropBag>,
    /// Passthrough properties merged last. `null` unsets a property.
    pub attrs: PropBag,
}

impl AxisOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_axis_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = Some(axis_type);
        self
    }

    #[must_use]
    pub fn with_hide(mut self, hide: bool) -> Self {
        self.hide = Some(hide);
        self
    }

    #[must_use]
    pub fn with_axis_line(mut self, axis_line: bool) -> Self {
        self.axis_line = Some(axis_line);
        self
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size: u32) -> Self {
        self.tick_size = Some(tick_size);
        self
    }

    #[must_use]
    pub fn with_tick_line(mut self, tick_line: bool) -> Self {
        self.tick_line = Some(tick_line);
        self
    }

    #[must_use]
    pub fn with_min_tick_gap(mut self, min_tick_gap: u32) -> Self {
        self.min_tick_gap = Some(min_tick_gap);
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    #[must_use]
    pub fn with_custom_attrs(mut self, custom_attrs: PropBag) -> Self {
        self.custom_attrs = Some(custom_attrs);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

/// Role-specific defaults applied when an axis is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AxisDefaults {
    pub(crate) min_tick_gap: Option<u32>,
    pub(crate) interval: Option<&'static str>,
}

pub(crate) const CATEGORY_AXIS_DEFAULTS: AxisDefaults = AxisDefaults {
    min_tick_gap: None,
    interval: Some("preserveStartEnd"),
};

/// Value axis of area and line charts.
pub(crate) const VALUE_AXIS_DEFAULTS: AxisDefaults = AxisDefaults {
    min_tick_gap: Some(50),
    interval: None,
};

pub(crate) const BAR_VALUE_AXIS_DEFAULTS: AxisDefaults = AxisDefaults {
    min_tick_gap: Some(5),
    interval: None,
};

const DEFAULT_TICK_SIZE: u32 = 10;

fn default_axis_attrs() -> PropBag {
    prop_bag([("fontSize", "12px")])
}

/// Fully defaulted axis properties, captured when the axis is enabled.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedAxis {
    data_key: Option<String>,
    props: PropBag,
}

impl ResolvedAxis {
    pub(crate) fn resolve(options: AxisOptions, defaults: AxisDefaults) -> Self {
        let mut props = PropBag::new();
        insert_present(&mut props, "hide", options.hide);
        insert_present(&mut props, "type", options.axis_type.map(AxisType::as_str));
        props.insert(
            "axisLine".to_owned(),
            Value::from(options.axis_line.unwrap_or(false)),
        );
        insert_present(
            &mut props,
            "minTickGap",
            options.min_tick_gap.or(defaults.min_tick_gap),
        );
        props.insert(
            "tickSize".to_owned(),
            Value::from(options.tick_size.unwrap_or(DEFAULT_TICK_SIZE)),
        );
        props.insert(
            "tickLine".to_owned(),
            Value::from(options.tick_line.unwrap_or(false)),
        );
        insert_present(
            &mut props,
            "interval",
            options
                .interval
                .or_else(|| defaults.interval.map(str::to_owned)),
        );
        props.extend(options.custom_attrs.unwrap_or_else(default_axis_attrs));
        merge_passthrough(&mut props, &options.attrs);

        Self {
            data_key: options.data_key,
            props,
        }
    }

    /// Builds the axis node. `fallback_data_key` fills `dataKey` when the caller
    /// did not override it; `default_type` fills `type` the same way.
    pub(crate) fn to_node(
        &self,
        kind: NodeKind,
        fallback_data_key: Option<&str>,
        default_type: Option<AxisType>,
    ) -> VisualNode {
        let mut props = PropBag::new();
        insert_present(
            &mut props,
            "dataKey",
            self.data_key.as_deref().or(fallback_data_key),
        );
        if !self.props.contains_key("type") {
            insert_present(&mut props, "type", default_type.map(AxisType::as_str));
        }
        props.extend(self.props.clone());
        VisualNode::new(kind).with_props(props)
    }
}

/// Enabled/disabled state of one axis role.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AxisSlot {
    Hidden,
    Shown(ResolvedAxis),
}

impl AxisSlot {
    pub(crate) fn configure(show: bool, options: AxisOptions, defaults: AxisDefaults) -> Self {
        if show {
            Self::Shown(ResolvedAxis::resolve(options, defaults))
        } else {
            Self::Hidden
        }
    }

    pub(crate) fn default_category() -> Self {
        Self::Shown(ResolvedAxis::resolve(
            AxisOptions::default(),
            CATEGORY_AXIS_DEFAULTS,
        ))
    }

    pub(crate) fn shown(&self) -> Option<&ResolvedAxis> {
        match self {
            Self::Hidden => None,
            Self::Shown(axis) => Some(axis),
        }
    }
}
