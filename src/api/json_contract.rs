use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::VisualNode;

use super::ChartDefinition;

pub const TREE_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_DEFINITION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualTreeJsonContractV1 {
    pub schema_version: u32,
    pub tree: VisualNode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinitionJsonContractV1 {
    pub schema_version: u32,
    pub definition: ChartDefinition,
}

impl VisualNode {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize visual tree: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = VisualTreeJsonContractV1 {
            schema_version: TREE_JSON_SCHEMA_V1,
            tree: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize visual tree contract v1: {e}"))
        })
    }

    /// Parses either a bare tree or a versioned `{schema_version, tree}` payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(tree) = serde_json::from_str::<VisualNode>(input) {
            return Ok(tree);
        }
        let payload: VisualTreeJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse visual tree json payload: {e}"))
        })?;
        if payload.schema_version != TREE_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported visual tree schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.tree)
    }
}

impl ChartDefinition {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDefinitionJsonContractV1 {
            schema_version: CHART_DEFINITION_JSON_SCHEMA_V1,
            definition: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize chart definition contract v1: {e}"
            ))
        })
    }

    /// Parses either a bare definition or a versioned
    /// `{schema_version, definition}` payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(definition) = serde_json::from_str::<ChartDefinition>(input) {
            return Ok(definition);
        }
        let payload: ChartDefinitionJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart definition payload: {e}"))
            })?;
        if payload.schema_version != CHART_DEFINITION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart definition schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.definition)
    }
}
