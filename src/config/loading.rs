use std::fs;
use std::path::Path;

use crate::config::{ConfigError, EngineConfig};

impl EngineConfig {
    /// Parse a TOML document. Missing keys take their canonical values.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }
}
