use buridan_charts::ChartError;
use buridan_charts::api::{
    AreaChart, AreaSeries, AxisOptions, ChartKind, CurveType, LegendPosition, RootOptions,
};
use buridan_charts::core::{ColorMode, Dataset, prop_bag};
use buridan_charts::render::{NodeKind, VisualNode};
use serde_json::{Value, json};

fn monthly_visitors() -> Dataset {
    Dataset::from_json_value(json!([
        {"month": "January", "desktop": 186, "mobile": 80},
        {"month": "February", "desktop": 305, "mobile": 200},
        {"month": "March", "desktop": 237, "mobile": 120},
    ]))
    .expect("dataset")
}

#[test]
fn compile_without_category_key_fails() {
    let err = AreaChart::new(monthly_visitors())
        .add_series("desktop")
        .compile()
        .expect_err("category key is required");

    assert!(matches!(
        err,
        ChartError::MissingRequiredKey {
            chart: ChartKind::Area,
            key: "category"
        }
    ));
    assert_eq!(
        err.to_string(),
        "area chart: category key must be set before rendering"
    );
}

#[test]
fn default_children_follow_compile_order() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series(AreaSeries::new("desktop").with_gradient(true))
        .add_series("mobile")
        .compile()
        .expect("compile");

    assert_eq!(tree.kind, NodeKind::AreaChart);
    assert_eq!(
        tree.child_kinds(),
        vec![
            &NodeKind::Defs,
            &NodeKind::Tooltip,
            &NodeKind::CartesianGrid,
            &NodeKind::Area,
            &NodeKind::Area,
            &NodeKind::XAxis,
        ]
    );
    assert_eq!(tree.prop("width"), Some(&json!("100%")));
    assert_eq!(tree.prop("height"), Some(&json!(250)));
    assert_eq!(tree.prop("data"), Some(&monthly_visitors().to_value()));
}

#[test]
fn empty_series_compiles_with_chrome_only() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .compile()
        .expect("area charts accept zero series");

    assert_eq!(
        tree.child_kinds(),
        vec![&NodeKind::Tooltip, &NodeKind::CartesianGrid, &NodeKind::XAxis]
    );
}

#[test]
fn gradient_series_references_its_definition() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series(
            AreaSeries::new("desktop")
                .with_color("chart-2")
                .with_gradient(true),
        )
        .compile()
        .expect("compile");

    let defs = tree.child(&NodeKind::Defs).expect("gradient definitions");
    let gradient = defs
        .child(&NodeKind::LinearGradient)
        .expect("linear gradient");
    assert_eq!(gradient.prop("id"), Some(&json!("desktop")));
    let stops = gradient.children_of(&NodeKind::GradientStop);
    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].prop("stopColor"), Some(&json!("var(--chart-2)")));
    assert_eq!(stops[0].prop("offset"), Some(&json!("5%")));
    assert_eq!(stops[1].prop("offset"), Some(&json!("95%")));

    let area = tree.child(&NodeKind::Area).expect("area series");
    assert_eq!(area.prop("fill"), Some(&json!("url(#desktop)")));
    assert_eq!(area.prop("stroke"), Some(&json!("var(--chart-2)")));
}

#[test]
fn plain_series_uses_resolved_color_for_fill_and_stroke() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series(
            AreaSeries::new("mobile")
                .with_color("#ff0000")
                .with_curve(CurveType::Natural)
                .with_stack_id("a"),
        )
        .compile()
        .expect("compile");

    assert!(tree.child(&NodeKind::Defs).is_none());
    let area = tree.child(&NodeKind::Area).expect("area");
    assert_eq!(area.prop("dataKey"), Some(&json!("mobile")));
    assert_eq!(area.prop("fill"), Some(&json!("#ff0000")));
    assert_eq!(area.prop("stroke"), Some(&json!("#ff0000")));
    assert_eq!(area.prop("type"), Some(&json!("natural")));
    assert_eq!(area.prop("stackId"), Some(&json!("a")));
    assert_eq!(area.prop("strokeWidth"), Some(&json!(1)));
    assert_eq!(area.prop("isAnimationActive"), Some(&json!(true)));
}

#[test]
fn null_passthrough_attribute_unsets_typed_property() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series(
            AreaSeries::new("desktop")
                .with_attr("strokeWidth", serde_json::Value::Null)
                .with_attr("fillOpacity", 0.4),
        )
        .compile()
        .expect("compile");

    let area = tree.child(&NodeKind::Area).expect("area");
    assert!(area.prop("strokeWidth").is_none());
    assert_eq!(area.prop("fillOpacity"), Some(&json!(0.4)));
}

#[test]
fn value_axis_is_emitted_before_series_with_defaults() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .configure_value_axis(true, AxisOptions::new())
        .compile()
        .expect("compile");

    assert_eq!(
        tree.child_kinds(),
        vec![
            &NodeKind::Tooltip,
            &NodeKind::CartesianGrid,
            &NodeKind::YAxis,
            &NodeKind::Area,
            &NodeKind::XAxis,
        ]
    );
    let y_axis = tree.child(&NodeKind::YAxis).expect("value axis");
    assert_eq!(y_axis.prop("minTickGap"), Some(&json!(50)));
    assert_eq!(y_axis.prop("axisLine"), Some(&json!(false)));
    assert_eq!(y_axis.prop("tickSize"), Some(&json!(10)));
    assert_eq!(y_axis.prop("fontSize"), Some(&json!("12px")));
    assert!(y_axis.prop("dataKey").is_none());
}

#[test]
fn category_axis_defaults_and_overrides() {
    let default_tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .compile()
        .expect("compile");
    let x_axis = default_tree.child(&NodeKind::XAxis).expect("category axis");
    assert_eq!(x_axis.prop("dataKey"), Some(&json!("month")));
    assert_eq!(x_axis.prop("interval"), Some(&json!("preserveStartEnd")));
    assert_eq!(x_axis.prop("tickLine"), Some(&json!(false)));

    let tuned = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .configure_category_axis(
            true,
            AxisOptions::new()
                .with_interval("equidistantPreserveStart")
                .with_custom_attrs(prop_bag([("fontSize", "10px")])),
        )
        .compile()
        .expect("compile");
    let x_axis = tuned.child(&NodeKind::XAxis).expect("category axis");
    assert_eq!(x_axis.prop("interval"), Some(&json!("equidistantPreserveStart")));
    assert_eq!(x_axis.prop("fontSize"), Some(&json!("10px")));

    let hidden = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .configure_category_axis(false, AxisOptions::new())
        .compile()
        .expect("compile");
    assert!(hidden.child(&NodeKind::XAxis).is_none());
}

#[test]
fn disabled_tooltip_and_grid_are_omitted() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .set_tooltip_visible(false)
        .set_grid_visible(false)
        .compile()
        .expect("compile");

    assert_eq!(tree.child_kinds(), vec![&NodeKind::Area, &NodeKind::XAxis]);
}

#[test]
fn dark_mode_changes_tooltip_background() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .set_color_mode(ColorMode::Dark)
        .compile()
        .expect("compile");

    let tooltip = tree.child(&NodeKind::Tooltip).expect("tooltip");
    let style = tooltip.prop("contentStyle").expect("content style");
    assert_eq!(style["background"], json!("oklch(0.14 0.00 286)"));
}

#[test]
fn root_options_and_overrides_merge_into_root() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .set_size(600_u32, 300)
        .configure_root(RootOptions::new().with_sync_id("visitors"))
        .compile_with(prop_bag([("syncId", "override"), ("accessibilityLayer", "on")]))
        .expect("compile");

    assert_eq!(tree.prop("width"), Some(&json!(600)));
    assert_eq!(tree.prop("height"), Some(&json!(300)));
    assert_eq!(tree.prop("syncId"), Some(&json!("override")));
    assert_eq!(tree.prop("accessibilityLayer"), Some(&json!("on")));
}

#[test]
fn caller_children_are_appended_last() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .append_children([VisualNode::custom("ReferenceLine").with_prop("y", 200)])
        .compile()
        .expect("compile");

    let last = tree.children.last().expect("children");
    assert_eq!(last.kind.tag(), "ReferenceLine");
    assert_eq!(last.prop("y"), Some(&json!(200)));
}

#[test]
fn passthrough_stroke_reaches_gradient_stops_and_legend() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series(
            AreaSeries::new("desktop")
                .with_gradient(true)
                .with_attr("stroke", "#ff0000"),
        )
        .set_custom_legend([("desktop", "Desktop")], LegendPosition::Bottom)
        .compile()
        .expect("compile");

    let chart = tree.child(&NodeKind::AreaChart).expect("area chart root");
    let area = chart.child(&NodeKind::Area).expect("area series");
    assert_eq!(area.prop("stroke"), Some(&json!("#ff0000")));

    let stops = chart
        .child(&NodeKind::Defs)
        .and_then(|defs| defs.child(&NodeKind::LinearGradient))
        .expect("linear gradient")
        .children_of(&NodeKind::GradientStop);
    assert_eq!(stops[0].prop("stopColor"), Some(&json!("#ff0000")));
    assert_eq!(stops[1].prop("stopColor"), Some(&json!("#ff0000")));

    let swatch = tree
        .child(&NodeKind::HStack)
        .and_then(|strip| strip.children.first())
        .and_then(|item| item.child(&NodeKind::Box))
        .expect("legend swatch");
    assert_eq!(swatch.prop("bg"), Some(&json!("#ff0000")));
}

#[test]
fn unset_passthrough_stroke_keeps_typed_gradient_color() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series(
            AreaSeries::new("desktop")
                .with_color("chart-3")
                .with_gradient(true)
                .with_attr("stroke", Value::Null),
        )
        .compile()
        .expect("compile");

    let area = tree.child(&NodeKind::Area).expect("area series");
    assert_eq!(area.prop("stroke"), None);
    let stops = tree
        .child(&NodeKind::Defs)
        .and_then(|defs| defs.child(&NodeKind::LinearGradient))
        .expect("linear gradient")
        .children_of(&NodeKind::GradientStop);
    assert_eq!(stops[0].prop("stopColor"), Some(&json!("var(--chart-3)")));
}

#[test]
fn legend_wraps_chart_in_column_box() {
    let tree = AreaChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .add_series(AreaSeries::new("mobile").with_color("chart-2"))
        .set_custom_legend([("desktop", "Desktop")], LegendPosition::Top)
        .compile()
        .expect("compile");

    assert_eq!(tree.kind, NodeKind::Box);
    assert_eq!(tree.prop("className"), Some(&json!("w-full flex flex-col")));
    assert_eq!(tree.child_kinds(), vec![&NodeKind::HStack, &NodeKind::AreaChart]);
}

#[test]
fn compiling_twice_yields_equal_trees() {
    let data = monthly_visitors();
    let chart = AreaChart::new(data.clone())
        .set_category_axis_key("month")
        .add_series(AreaSeries::new("desktop").with_gradient(true));

    let first = chart.compile().expect("first compile");
    let second = chart.compile().expect("second compile");
    assert_eq!(first, second);
    assert!(chart.data().shares_rows_with(&data));
}

#[test]
fn two_month_area_compiles_to_minimal_tree() {
    let data = Dataset::from_json_value(json!([{"m": "Jan", "d": 10}, {"m": "Feb", "d": 20}]))
        .expect("dataset");
    let tree = AreaChart::new(data)
        .set_category_axis_key("m")
        .add_series("d")
        .compile()
        .expect("compile");

    assert_eq!(tree.kind, NodeKind::AreaChart);
    assert_eq!(
        tree.child_kinds(),
        vec![
            &NodeKind::Tooltip,
            &NodeKind::CartesianGrid,
            &NodeKind::Area,
            &NodeKind::XAxis,
        ]
    );
    let area = &tree.children[2];
    assert_eq!(area.prop("dataKey"), Some(&json!("d")));
    assert_eq!(area.prop("strokeWidth"), Some(&json!(1)));
    assert_eq!(area.prop("isAnimationActive"), Some(&json!(true)));
    let axis = &tree.children[3];
    assert_eq!(axis.prop("dataKey"), Some(&json!("m")));
    assert_eq!(axis.prop("tickSize"), Some(&json!(10)));
    assert_eq!(axis.prop("axisLine"), Some(&json!(false)));
}
