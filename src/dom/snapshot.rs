use serde::{Deserialize, Serialize};

use crate::error::{VisError, VisResult};

pub const DOM_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable structure of an element subtree.
///
/// Used to compare trees across render passes and to store fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomSnapshot {
    pub tag: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub children: Vec<DomSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DomSnapshot,
}

impl DomSnapshot {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|entry| entry == class)
    }

    /// Counts descendants (excluding `self`) carrying `class`.
    #[must_use]
    pub fn count_with_class(&self, class: &str) -> usize {
        self.children
            .iter()
            .map(|child| usize::from(child.has_class(class)) + child.count_with_class(class))
            .sum()
    }

    pub fn to_json_contract_v1_pretty(&self) -> VisResult<String> {
        let payload = DomSnapshotJsonContractV1 {
            schema_version: DOM_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            VisError::InvalidData(format!("failed to serialize dom snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> VisResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DomSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DomSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            VisError::InvalidData(format!("failed to parse dom snapshot json payload: {e}"))
        })?;
        if payload.schema_version != DOM_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(VisError::InvalidData(format!(
                "unsupported dom snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::DomSnapshot;
    use crate::error::VisError;

    fn leaf(classes: &[&str]) -> DomSnapshot {
        DomSnapshot {
            tag: "div".to_owned(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            children: Vec::new(),
        }
    }

    #[test]
    fn contract_payload_parses_back() {
        let snapshot = DomSnapshot {
            tag: "div".to_owned(),
            classes: Vec::new(),
            children: vec![leaf(&["x", "y"]), leaf(&["x"])],
        };
        let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
        assert!(json.contains("\"schema_version\": 1"));
        let parsed = DomSnapshot::from_json_compat_str(&json).expect("parse");
        assert_eq!(parsed, snapshot);
        assert_eq!(parsed.count_with_class("x"), 2);
        assert_eq!(parsed.count_with_class("y"), 1);
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        let json = r#"{"schema_version": 9, "snapshot": {"tag": "div"}}"#;
        let err = DomSnapshot::from_json_compat_str(json).expect_err("version");
        assert!(matches!(err, VisError::InvalidData(_)));
    }
}
