//! Webflow API version handling.
//!
//! Webflow selects the API version from the `accept-version` request
//! header. This module provides the [`ApiVersion`] type sent in that header.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Webflow API version, sent as the `accept-version` header.
///
/// # Example
///
/// ```rust
/// use webflow_api::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "1.0.0");
///
/// let custom: ApiVersion = "1.1.0".parse().unwrap();
/// assert_eq!(custom, ApiVersion::Custom("1.1.0".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Version 1.0.0 of the Data API.
    #[default]
    V1_0_0,
    /// Any other dotted version string, for versions newer than this SDK.
    Custom(String),
}

impl ApiVersion {
    /// Returns the newest version this SDK was written against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1_0_0
    }

    /// Returns `true` for versions known to this SDK.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::V1_0_0)
    }

    // Format: MAJOR.MINOR.PATCH, all numeric
    fn is_valid_version_format(s: &str) -> bool {
        let parts: Vec<&str> = s.split('.').collect();
        parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1_0_0 => f.write_str("1.0.0"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "1.0.0" => Ok(Self::V1_0_0),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_version() {
        assert_eq!("1.0.0".parse::<ApiVersion>().unwrap(), ApiVersion::V1_0_0);
        assert_eq!(" 1.0.0 ".parse::<ApiVersion>().unwrap(), ApiVersion::V1_0_0);
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V1_0_0.to_string(), "1.0.0");
        assert_eq!(ApiVersion::Custom("2.0.0".to_string()).to_string(), "2.0.0");
    }

    #[test]
    fn test_api_version_default_is_latest() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
        assert!(ApiVersion::latest().is_known());
    }

    #[test]
    fn test_api_version_parses_future_versions_as_custom() {
        let version: ApiVersion = "1.2.10".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("1.2.10".to_string()));
        assert!(!version.is_known());
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        for bad in ["", "v1", "1.0", "1.0.0.0", "1..0", "1.a.0", "2024-10"] {
            assert!(
                matches!(
                    bad.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }
}
