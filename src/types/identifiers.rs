use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Sequential sensor identifier: `S1`, `S2`, ...
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorId(String);

impl SensorId {
    /// Identifier for the sensor at zero-based `index`.
    pub fn from_index(index: usize) -> Self {
        SensorId(format!("S{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content hash of a generated sensor layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutVersion(String);

impl LayoutVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        LayoutVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
