/// Boxed error raised by a vendor binding.
pub type VendorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All error types that can occur while adapting C by GE bulbs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to deserialize the platform configuration.
    #[error("failed to load config: {0:?}")]
    ConfigLoad(serde_json::Error),

    /// The platform configuration is missing a required value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The vendor library failed while performing an action.
    #[error("vendor {action} error: {err}")]
    Vendor { action: String, err: VendorError },
}

impl Error {
    /// Create a new vendor error
    pub fn vendor(action: &str, err: impl Into<VendorError>) -> Self {
        Error::Vendor {
            action: action.to_string(),
            err: err.into(),
        }
    }

    /// Create a new invalid config error
    pub fn invalid_config(reason: &str) -> Self {
        Error::InvalidConfig(reason.to_string())
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
