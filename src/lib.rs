//! buridan-charts: fluent chart builders for Recharts.
//!
//! Builders accumulate dataset, series, axis, legend and tooltip settings and
//! compile them into a deterministic [`render::VisualNode`] tree whose node
//! types and property names follow Recharts components.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AreaChart, BarChart, ChartBuilder, ChartDefinition, LineChart, PieChart};
pub use error::{ChartError, ChartResult};
