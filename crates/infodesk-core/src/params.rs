//! Parameter structures for directory operations.
//!
//! These structures are shared by every interface (CLI flags, the
//! interactive menu) without carrying framework-specific derives. Interface
//! layers define their own argument types and convert into these.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Menu Prompts   │    │  Core Params    │
//! │  (clap derives) │───▶│  (line input)   │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::{path::PathBuf, str::FromStr};

use crate::error::DirectoryError;

/// Parameters for reporting a health provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderLookup {
    pub id: i64,
}

impl FromStr for ProviderLookup {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(|id| Self { id })
            .map_err(|e| DirectoryError::invalid_input("provider_id", e.to_string()))
    }
}

/// Parameters for reporting a health service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLookup {
    pub name: String,
}

/// Parameters for reporting the shortest path between two locations.
///
/// Names are matched exactly; no trimming or case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    pub start: String,
    pub end: String,
}

/// Parameters for moving a service to another location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateServiceLocation {
    pub service: String,
    pub location: String,
}

/// Parameters for running a SQL script against the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadScript {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_lookup_parses_trimmed_id() {
        let lookup: ProviderLookup = " 42\n".parse().expect("Failed to parse provider ID");
        assert_eq!(lookup, ProviderLookup { id: 42 });
    }

    #[test]
    fn test_provider_lookup_accepts_negative_id() {
        let lookup: ProviderLookup = "-3".parse().expect("Failed to parse provider ID");
        assert_eq!(lookup, ProviderLookup { id: -3 });
    }

    #[test]
    fn test_provider_lookup_rejects_non_numeric() {
        let err = "forty-two"
            .parse::<ProviderLookup>()
            .expect_err("Non-numeric ID should fail");
        assert!(matches!(
            err,
            DirectoryError::InvalidInput { ref field, .. } if field == "provider_id"
        ));
    }
}
