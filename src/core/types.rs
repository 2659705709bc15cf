use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// One dataset row: field name to scalar value, in insertion order.
pub type Record = IndexMap<String, Value>;

/// Ordered records plotted by a chart.
///
/// The records sit behind an `Arc`, so handing a dataset to several builders
/// (or cloning a builder) never copies rows. Trees get a JSON view of the
/// rows at compile time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Arc<Vec<Record>>);

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self(Arc::new(records))
    }

    /// Builds a dataset from a JSON array of objects.
    pub fn from_json_value(value: Value) -> ChartResult<Self> {
        let records: Vec<Record> = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("dataset must be an array of objects: {e}"))
        })?;
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when both handles point at the same rows.
    #[must_use]
    pub fn shares_rows_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|record| {
                    Value::Object(
                        record
                            .iter()
                            .map(|(field, value)| (field.clone(), value.clone()))
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

/// Chart width: either a pixel count or a relative CSS length such as `"100%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Relative(String),
}

impl Dimension {
    #[must_use]
    pub fn percent(value: u32) -> Self {
        Self::Relative(format!("{value}%"))
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Pixels(px) => Value::from(*px),
            Self::Relative(length) => Value::from(length.as_str()),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(length: &str) -> Self {
        Self::Relative(length.to_owned())
    }
}

impl From<String> for Dimension {
    fn from(length: String) -> Self {
        Self::Relative(length)
    }
}

/// Literal chart size stored by builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: Dimension,
    pub height: u32,
}

impl ChartSize {
    #[must_use]
    pub fn new(width: impl Into<Dimension>, height: u32) -> Self {
        Self {
            width: width.into(),
            height,
        }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: Dimension::percent(100),
            height: 250,
        }
    }
}
