use buridan_charts::ChartError;
use buridan_charts::api::{AxisId, AxisOptions, ChartKind, CurveType, LineChart, LineSeries};
use buridan_charts::core::Dataset;
use buridan_charts::render::{NodeKind, VisualNode};
use serde_json::json;

fn monthly_visitors() -> Dataset {
    Dataset::from_json_value(json!([
        {"month": "January", "desktop": 186, "mobile": 80},
        {"month": "February", "desktop": 305, "mobile": 200},
    ]))
    .expect("dataset")
}

#[test]
fn compile_without_category_key_fails() {
    let err = LineChart::new(monthly_visitors())
        .add_series("desktop")
        .compile()
        .expect_err("category key is required");
    assert!(matches!(
        err,
        ChartError::MissingRequiredKey {
            chart: ChartKind::Line,
            ..
        }
    ));
}

#[test]
fn line_chart_never_emits_gradient_definitions() {
    let tree = LineChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .add_series(LineSeries::new("mobile").with_color("chart-2"))
        .compile()
        .expect("compile");

    assert_eq!(tree.kind, NodeKind::LineChart);
    assert_eq!(
        tree.child_kinds(),
        vec![
            &NodeKind::Tooltip,
            &NodeKind::CartesianGrid,
            &NodeKind::Line,
            &NodeKind::Line,
            &NodeKind::XAxis,
        ]
    );
}

#[test]
fn stroke_overrides_color() {
    let tree = LineChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series(
            LineSeries::new("desktop")
                .with_color("chart-1")
                .with_stroke("rgb(0, 0, 0)")
                .with_curve(CurveType::Monotone)
                .with_dot(false)
                .with_stroke_width(2)
                .with_y_axis_id(AxisId::from("right")),
        )
        .compile()
        .expect("compile");

    let line = tree.child(&NodeKind::Line).expect("line");
    assert_eq!(line.prop("stroke"), Some(&json!("rgb(0, 0, 0)")));
    assert_eq!(line.prop("type"), Some(&json!("monotone")));
    assert_eq!(line.prop("dot"), Some(&json!(false)));
    assert_eq!(line.prop("strokeWidth"), Some(&json!(2)));
    assert_eq!(line.prop("yAxisId"), Some(&json!("right")));
}

#[test]
fn stroke_width_defaults_to_one_and_keeps_explicit_zero() {
    let tree = LineChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .add_series(LineSeries::new("mobile").with_stroke_width(0))
        .compile()
        .expect("compile");

    let widths: Vec<_> = tree
        .children_of(&NodeKind::Line)
        .into_iter()
        .filter_map(|line| line.prop("strokeWidth"))
        .collect();
    assert_eq!(widths, vec![&json!(1), &json!(0)]);
}

#[test]
fn value_axis_uses_area_line_tick_gap() {
    let tree = LineChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .configure_value_axis(true, AxisOptions::new().with_data_key("desktop"))
        .compile()
        .expect("compile");

    let y_axis = tree.child(&NodeKind::YAxis).expect("value axis");
    assert_eq!(y_axis.prop("dataKey"), Some(&json!("desktop")));
    assert_eq!(y_axis.prop("minTickGap"), Some(&json!(50)));
}

#[test]
fn caller_children_follow_category_axis() {
    let tree = LineChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("desktop")
        .append_children([VisualNode::custom("Brush")])
        .append_children([VisualNode::custom("ReferenceDot")])
        .compile()
        .expect("compile");

    let tags: Vec<&str> = tree.children.iter().map(|child| child.kind.tag()).collect();
    assert_eq!(
        tags,
        vec!["Tooltip", "CartesianGrid", "Line", "XAxis", "Brush", "ReferenceDot"]
    );
}

#[test]
fn series_keys_keep_insertion_order() {
    let chart = LineChart::new(monthly_visitors())
        .set_category_axis_key("month")
        .add_series("mobile")
        .add_series("desktop");
    assert_eq!(chart.series_keys(), vec!["mobile", "desktop"]);
}
