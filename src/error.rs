use thiserror::Error;

use crate::api::ChartKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{chart} chart: {key} key must be set before rendering")]
    MissingRequiredKey {
        chart: ChartKind,
        key: &'static str,
    },

    #[error("{chart} chart: at least one series required before rendering")]
    EmptySeries { chart: ChartKind },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
