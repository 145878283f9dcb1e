//! Health service model definition.

use serde::{Deserialize, Serialize};

/// A health service and where it currently resides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Unique service name
    pub name: String,

    /// Kind of care the service provides
    pub health_type: Option<String>,

    /// Name of the location the service resides in, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Floor of that location, if assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
}
