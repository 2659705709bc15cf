mod area_chart;
mod axis_config;
mod bar_chart;
mod chart_builder;
mod chart_definition;
mod chart_state;
mod chrome;
mod json_contract;
mod legend;
mod line_chart;
mod pie_chart;
mod root_options;
mod series;
mod validation;

pub use area_chart::{AreaChart, AreaSeries};
pub use axis_config::{AxisOptions, AxisType};
pub use bar_chart::{BarChart, BarRadius, BarSeries};
pub use chart_builder::{ChartBuilder, ChartKind};
pub use chart_definition::{
    AreaDefinition, AxisDefinition, BarDefinition, CartesianDefinition, ChartDefinition,
    CommonDefinition, LineDefinition, PieDefinition,
};
pub use json_contract::{
    CHART_DEFINITION_JSON_SCHEMA_V1, ChartDefinitionJsonContractV1, TREE_JSON_SCHEMA_V1,
    VisualTreeJsonContractV1,
};
pub use legend::{LegendConfig, LegendPosition};
pub use line_chart::{LineChart, LineSeries};
pub use pie_chart::PieChart;
pub use root_options::{ChartLayout, Margin, RootOptions, StackOffset, SyncMethod};
pub use series::{AxisId, CurveType, SeriesLabel};
