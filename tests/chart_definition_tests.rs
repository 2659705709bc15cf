use buridan_charts::ChartError;
use buridan_charts::api::{
    AreaChart, AreaSeries, AxisOptions, BarChart, BarSeries, ChartDefinition, ChartKind,
    ChartLayout, LegendPosition, PieChart,
};
use buridan_charts::core::Dataset;
use buridan_charts::render::{NodeKind, NullRenderer};
use serde_json::json;

fn visitors() -> Dataset {
    Dataset::from_json_value(json!([
        {"month": "January", "desktop": 186, "mobile": 80},
        {"month": "February", "desktop": 305, "mobile": 200},
    ]))
    .expect("dataset")
}

#[test]
fn area_definition_matches_builder_output() {
    let raw = json!({
        "kind": "area",
        "data": [
            {"month": "January", "desktop": 186, "mobile": 80},
            {"month": "February", "desktop": 305, "mobile": 200}
        ],
        "category_key": "month",
        "series": [
            {"key": "desktop", "gradient": true},
            {"key": "mobile", "color": "chart-2"}
        ],
        "legend": {"labels": {"desktop": "Desktop", "mobile": "Mobile"}, "position": "top"}
    });
    let definition: ChartDefinition = serde_json::from_value(raw).expect("definition");
    assert_eq!(definition.kind(), ChartKind::Area);

    let expected = AreaChart::new(visitors())
        .set_category_axis_key("month")
        .add_series(AreaSeries::new("desktop").with_gradient(true))
        .add_series(AreaSeries::new("mobile").with_color("chart-2"))
        .set_custom_legend(
            [("desktop", "Desktop"), ("mobile", "Mobile")],
            LegendPosition::Top,
        )
        .compile()
        .expect("builder compile");

    assert_eq!(definition.compile().expect("definition compile"), expected);
}

#[test]
fn bar_definition_replays_layout_and_axes() {
    let definition = ChartDefinition::from_json_compat_str(
        r#"{
            "kind": "bar",
            "data": [{"month": "January", "desktop": 186}],
            "category_key": "month",
            "layout": "vertical",
            "value_axis": {"show": true},
            "grid": false,
            "tooltip": false,
            "series": [{"key": "desktop", "radius": 5}]
        }"#,
    )
    .expect("definition");

    let tree = definition.compile().expect("compile");
    assert_eq!(tree.prop("layout"), Some(&json!("vertical")));
    assert_eq!(
        tree.child_kinds(),
        vec![&NodeKind::XAxis, &NodeKind::Bar, &NodeKind::YAxis]
    );

    let expected = BarChart::new(Dataset::from_json_value(json!([
        {"month": "January", "desktop": 186}
    ]))
    .expect("dataset"))
    .set_category_axis_key("month")
    .set_layout(ChartLayout::Vertical)
    .configure_value_axis(true, AxisOptions::new())
    .set_grid_visible(false)
    .set_tooltip_visible(false)
    .add_series(BarSeries::new("desktop").with_radius(5_u32))
    .compile()
    .expect("builder compile");
    assert_eq!(tree, expected);
}

#[test]
fn bar_definition_without_series_reports_empty_series() {
    let definition = ChartDefinition::from_json_compat_str(
        r#"{"kind": "bar", "category_key": "month"}"#,
    )
    .expect("definition");
    let err = definition.compile().expect_err("no series");
    assert!(matches!(err, ChartError::EmptySeries { chart: ChartKind::Bar }));
}

#[test]
fn pie_definition_round_trips_through_versioned_envelope() {
    let raw = r#"{
        "schema_version": 1,
        "definition": {
            "kind": "pie",
            "data": [{"browser": "chrome", "visitors": 275}],
            "value_key": "visitors",
            "name_key": "browser",
            "colors": ["chart-1", "chart-2"],
            "inner_radius": 60,
            "label": {"position": "outside"},
            "label_line": false
        }
    }"#;
    let definition = ChartDefinition::from_json_compat_str(raw).expect("definition");
    let tree = definition.compile().expect("compile");

    let expected = PieChart::new(Dataset::from_json_value(json!([
        {"browser": "chrome", "visitors": 275}
    ]))
    .expect("dataset"))
    .set_values("visitors", "browser")
    .set_colors(["chart-1", "chart-2"])
    .set_radius(Some(60_u32.into()), None)
    .set_label(
        buridan_charts::core::prop_bag([("position", "outside")]),
        Some(false),
    )
    .compile()
    .expect("builder compile");
    assert_eq!(tree, expected);

    let encoded = definition.to_json_contract_v1_pretty().expect("encode");
    let decoded = ChartDefinition::from_json_compat_str(&encoded).expect("decode");
    assert_eq!(decoded.compile().expect("compile"), tree);
}

#[test]
fn unsupported_definition_schema_version_is_rejected() {
    let err = ChartDefinition::from_json_compat_str(
        r#"{"schema_version": 2, "definition": {"kind": "line"}}"#,
    )
    .expect_err("schema v2 is unknown");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(err.to_string().contains("unsupported chart definition schema version: 2"));
}

#[test]
fn unknown_chart_kind_is_invalid_data() {
    let err = ChartDefinition::from_json_compat_str(r#"{"kind": "radar"}"#)
        .expect_err("radar charts are not supported");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn boxed_builder_renders_into_null_renderer() {
    let definition: ChartDefinition = serde_json::from_value(json!({
        "kind": "line",
        "data": [{"month": "January", "desktop": 186}],
        "category_key": "month",
        "series": [{"key": "desktop"}]
    }))
    .expect("definition");

    let builder = definition.into_builder();
    assert_eq!(builder.kind(), ChartKind::Line);

    let mut renderer = NullRenderer::default();
    builder.render_into(&mut renderer).expect("render");
    assert_eq!(renderer.render_calls, 1);
    assert_eq!(renderer.last_root_kind, Some(NodeKind::LineChart));
    assert_eq!(renderer.last_node_count, 5);
}
