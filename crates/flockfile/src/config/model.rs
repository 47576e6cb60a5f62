use super::consts::{DEFAULT_MODE, MAX_MODE};
use crate::error::{FileLockError, Result};
use serde::{Deserialize, Serialize};

/// Options applied when opening a [`LockedFile`](crate::LockedFile)
///
/// ```toml
/// mode = 0o600
/// create_parents = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenConfig {
    /// Permission bits used when the file is created (subject to umask)
    #[serde(default = "default_mode")]
    pub mode: u32,
    /// Create missing parent directories before opening
    #[serde(default)]
    pub create_parents: bool,
}

fn default_mode() -> u32 {
    DEFAULT_MODE
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE,
            create_parents: false,
        }
    }
}

impl OpenConfig {
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_create_parents(mut self, create_parents: bool) -> Self {
        self.create_parents = create_parents;
        self
    }

    /// Parses and validates a TOML table
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: OpenConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mode > MAX_MODE {
            return Err(FileLockError::ConfigInvalidValue {
                field: "mode".to_string(),
                reason: format!("{:#o} exceeds {:#o}", self.mode, MAX_MODE),
            });
        }
        Ok(())
    }
}
