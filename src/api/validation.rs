use crate::error::{ChartError, ChartResult};

use super::ChartKind;

/// Returns the configured key, rejecting unset or empty keys.
pub(super) fn require_key<'a>(
    chart: ChartKind,
    key_name: &'static str,
    value: Option<&'a str>,
) -> ChartResult<&'a str> {
    match value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(ChartError::MissingRequiredKey {
            chart,
            key: key_name,
        }),
    }
}

pub(super) fn require_series(chart: ChartKind, series_len: usize) -> ChartResult<()> {
    if series_len == 0 {
        return Err(ChartError::EmptySeries { chart });
    }
    Ok(())
}
