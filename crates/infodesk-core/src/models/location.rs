//! Location model definition.

use serde::{Deserialize, Serialize};

/// A named place in the facility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    /// Surrogate identifier
    pub id: i64,

    /// Name used at the user-facing boundary
    pub name: String,

    /// Floor the location is on
    pub floor: String,
}
