//! Canonical operation identifiers.

use crate::utils::config::OPERATION_IDS;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Canonical name of a benchmarked primitive (e.g. `msm_G1`, `pairing`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(String);

impl OperationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id belongs to the canonical vocabulary
    pub fn is_known(&self) -> bool {
        OPERATION_IDS.contains(&self.0.as_str())
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OperationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OperationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for OperationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
