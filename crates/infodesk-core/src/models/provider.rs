//! Health provider model definition.

use serde::{Deserialize, Serialize};

/// A health provider with their titles and office locations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provider {
    /// Unique identifier for the provider
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Title acronyms (e.g. "MD"), in first-seen order without repeats
    #[serde(default)]
    pub titles: Vec<String>,

    /// Office location names, in first-seen order without repeats
    #[serde(default)]
    pub locations: Vec<String>,
}

impl Provider {
    /// Creates a provider with no titles or office locations.
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            titles: Vec::new(),
            locations: Vec::new(),
        }
    }

    /// Adds a title unless it is already present.
    pub fn add_title(&mut self, title: impl Into<String>) {
        push_unique(&mut self.titles, title.into());
    }

    /// Adds an office location unless it is already present.
    pub fn add_location(&mut self, location: impl Into<String>) {
        push_unique(&mut self.locations, location.into());
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}
