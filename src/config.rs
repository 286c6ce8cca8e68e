//! Platform configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Credentials for the C by GE cloud account.
///
/// Deserialized from the host's platform entry, e.g.
///
/// ```json
/// { "platform": "cbyge", "name": "me@example.com", "password": "hunter2" }
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub platform: Option<String>,
    pub name: String,
    pub password: String,
}

impl PlatformConfig {
    pub fn new(name: &str, password: &str) -> Self {
        PlatformConfig {
            platform: None,
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    /// Parse and validate a platform entry from its JSON value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::PlatformConfig;
    /// use serde_json::json;
    ///
    /// let config = PlatformConfig::from_value(json!({
    ///     "platform": "cbyge",
    ///     "name": "me@example.com",
    ///     "password": "hunter2",
    /// }))
    /// .unwrap();
    /// assert_eq!(config.name, "me@example.com");
    ///
    /// assert!(PlatformConfig::from_value(json!({"name": "me@example.com"})).is_err());
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let config: PlatformConfig = serde_json::from_value(value).map_err(Error::ConfigLoad)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a platform entry from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PlatformConfig = serde_json::from_str(json).map_err(Error::ConfigLoad)?;
        config.validate()?;
        Ok(config)
    }

    /// Both fields are required strings and must not be blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_config("name must not be empty"));
        }
        if self.password.trim().is_empty() {
            return Err(Error::invalid_config("password must not be empty"));
        }
        Ok(())
    }
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("platform", &self.platform)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}
