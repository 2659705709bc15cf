//! Fixed chart chrome shared by every builder: tooltip, grid and gradient
//! definitions.

use serde_json::{Value, json};

use crate::core::{ColorMode, scale_color};
use crate::render::{NodeKind, VisualNode};

use super::series::SeriesEntry;

const TOOLTIP_FONT_FAMILY: &str = "IBM Plex Mono,ui-monospace,monospace";
const TOOLTIP_LIGHT_BACKGROUND: &str = "oklch(0.97 0.00 0)";
const TOOLTIP_DARK_BACKGROUND: &str = "oklch(0.14 0.00 286)";
const TOOLTIP_WIDTH: &str = "175px";

fn tooltip_content_style(color_mode: ColorMode) -> Value {
    json!({
        "background": color_mode.select(TOOLTIP_LIGHT_BACKGROUND, TOOLTIP_DARK_BACKGROUND),
        "borderColor": scale_color("slate", 5),
        "borderRadius": "5px",
        "fontFamily": TOOLTIP_FONT_FAMILY,
        "fontSize": "0.875rem",
        "lineHeight": "1.25rem",
        "fontWeight": "500",
        "letterSpacing": "-0.01rem",
        "minWidth": "8rem",
        "width": TOOLTIP_WIDTH,
        "padding": "0.375rem 0.625rem",
        "position": "relative",
    })
}

pub(crate) fn tooltip_node(color_mode: ColorMode) -> VisualNode {
    VisualNode::new(NodeKind::Tooltip)
        .with_prop("isAnimationActive", false)
        .with_prop("separator", "")
        .with_prop("cursor", false)
        .with_prop(
            "itemStyle",
            json!({
                "color": "currentColor",
                "display": "flex",
                "paddingBottom": "0px",
                "justifyContent": "space-between",
                "textTransform": "capitalize",
            }),
        )
        .with_prop(
            "labelStyle",
            json!({"color": scale_color("slate", 10), "fontWeight": "500"}),
        )
        .with_prop("contentStyle", tooltip_content_style(color_mode))
}

/// Horizontal-only grid lines at reduced opacity.
pub(crate) fn grid_node() -> VisualNode {
    VisualNode::new(NodeKind::CartesianGrid)
        .with_prop("horizontal", true)
        .with_prop("vertical", false)
        .with_prop("className", "opacity-25")
}

fn gradient_stop(color: &str, offset: &str, opacity: f64) -> VisualNode {
    VisualNode::new(NodeKind::GradientStop)
        .with_prop("stopColor", color)
        .with_prop("offset", offset)
        .with_prop("stopOpacity", opacity)
}

/// Vertical two-stop gradient with the series key as id.
fn linear_gradient(series_key: &str, stroke: &str) -> VisualNode {
    VisualNode::new(NodeKind::LinearGradient)
        .with_prop("id", series_key)
        .with_prop("x1", 0)
        .with_prop("x2", 0)
        .with_prop("y1", 0)
        .with_prop("y2", 1)
        .with_child(gradient_stop(stroke, "5%", 0.8))
        .with_child(gradient_stop(stroke, "95%", 0.1))
}

/// One `defs` node holding a gradient per gradient-filled series, or `None`
/// when no series asked for one.
pub(crate) fn gradient_definitions(series: &[SeriesEntry]) -> Option<VisualNode> {
    let gradients: Vec<VisualNode> = series
        .iter()
        .filter_map(|entry| {
            entry
                .gradient_stroke
                .as_deref()
                .map(|stroke| linear_gradient(&entry.key, stroke))
        })
        .collect();

    if gradients.is_empty() {
        return None;
    }
    Some(VisualNode::new(NodeKind::Defs).with_children(gradients))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_background_follows_color_mode() {
        let light = tooltip_node(ColorMode::Light);
        let dark = tooltip_node(ColorMode::Dark);

        assert_eq!(
            light.prop("contentStyle").and_then(|s| s.get("background")),
            Some(&json!(TOOLTIP_LIGHT_BACKGROUND))
        );
        assert_eq!(
            dark.prop("contentStyle").and_then(|s| s.get("background")),
            Some(&json!(TOOLTIP_DARK_BACKGROUND))
        );
        assert_eq!(
            light.prop("contentStyle").and_then(|s| s.get("fontFamily")),
            Some(&json!(TOOLTIP_FONT_FAMILY))
        );
    }

    #[test]
    fn gradient_stops_fade_from_top_to_bottom() {
        let gradient = linear_gradient("desktop", "var(--chart-1)");
        assert_eq!(gradient.prop("id"), Some(&json!("desktop")));
        assert_eq!(gradient.children.len(), 2);
        assert_eq!(gradient.children[0].prop("offset"), Some(&json!("5%")));
        assert_eq!(gradient.children[0].prop("stopOpacity"), Some(&json!(0.8)));
        assert_eq!(gradient.children[1].prop("offset"), Some(&json!("95%")));
        assert_eq!(gradient.children[1].prop("stopOpacity"), Some(&json!(0.1)));
    }
}
