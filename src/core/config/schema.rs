//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used by both the global file and the project file;
//! every field is optional so a file only needs the keys it overrides.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Keys accepted by `config get` / `config set`.
pub const KEYS: &[&str] = &["render.include_repeats", "load.strict"];

/// One configuration file.
///
/// # Example
///
/// ```toml
/// [render]
/// include_repeats = false
///
/// [load]
/// strict = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Tree rendering defaults
    pub render: Option<RenderDefaults>,

    /// Edge-list loading defaults
    pub load: Option<LoadDefaults>,
}

/// Tree rendering defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderDefaults {
    /// Expand shared subtrees on every encounter
    pub include_repeats: Option<bool>,
}

/// Edge-list loading defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoadDefaults {
    /// Abort on the first rejected statement
    pub strict: Option<bool>,
}

impl ConfigFile {
    /// Read a dotted key, if set in this file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys outside [`KEYS`].
    pub fn get(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        match key {
            "render.include_repeats" => {
                Ok(self.render.as_ref().and_then(|r| r.include_repeats))
            }
            "load.strict" => Ok(self.load.as_ref().and_then(|l| l.strict)),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a dotted key from its string form.
    ///
    /// # Errors
    ///
    /// - `ConfigError::UnknownKey` for keys outside [`KEYS`]
    /// - `ConfigError::InvalidValue` if the value is not `true` or `false`
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let parsed: bool = value.parse().map_err(|_| {
            ConfigError::InvalidValue(format!(
                "'{}' expects true or false, got '{}'",
                key, value
            ))
        })?;

        match key {
            "render.include_repeats" => {
                self.render
                    .get_or_insert_with(RenderDefaults::default)
                    .include_repeats = Some(parsed);
            }
            "load.strict" => {
                self.load.get_or_insert_with(LoadDefaults::default).strict = Some(parsed);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}
