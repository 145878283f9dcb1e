//! Result wrapper types for displaying update outcomes.

use std::fmt;

use serde::Serialize;

use crate::models::Service;

/// Wrapper type for displaying the result of update operations.
///
/// # Examples
///
/// ```rust
/// use infodesk_core::{display::UpdateResult, models::Service};
///
/// let service = Service {
///     name: "Radiology".to_string(),
///     health_type: Some("Imaging".to_string()),
///     location: Some("West Wing".to_string()),
///     floor: Some("3".to_string()),
/// };
///
/// let output = UpdateResult::new(service).to_string();
/// assert!(output.contains("Updated service Radiology"));
/// ```
#[derive(Debug, Serialize)]
pub struct UpdateResult<T> {
    pub resource: T,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for UpdateResult<Service> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated service {}", self.resource.name)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
