//! Display implementations for domain models.
//!
//! All output is markdown: a header line, a metadata list, and for paths a
//! table with one row per waypoint.

use std::fmt;

use crate::models::{PathNode, PathOutcome, Provider, ResolvedPath, Service};

const UNASSIGNED: &str = "unassigned";

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Provider {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- First Name: {}", self.first_name)?;
        writeln!(f, "- Last Name: {}", self.last_name)?;
        writeln!(f, "- Title: {}", join_or(&self.titles, "none"))?;
        writeln!(f, "- Office Location: {}", join_or(&self.locations, "none"))
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Service: {}", self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Health Type: {}",
            self.health_type.as_deref().unwrap_or("unspecified")
        )?;
        writeln!(
            f,
            "- Location: {}",
            self.location.as_deref().unwrap_or(UNASSIGNED)
        )?;
        writeln!(f, "- Floor: {}", self.floor.as_deref().unwrap_or(UNASSIGNED))
    }
}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} | {} |",
            self.order,
            escape_cell(&self.location),
            escape_cell(&self.floor)
        )
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Path {}", self.path_id)?;
        writeln!(f)?;
        writeln!(f, "- Start: {}", self.start)?;
        writeln!(f, "- End: {}", self.end)?;
        writeln!(f, "- Stops: {}", self.nodes.len())?;
        writeln!(f)?;
        writeln!(f, "| Order | Location | Floor |")?;
        writeln!(f, "|------:|:---------|:------|")?;
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(path) => write!(f, "{path}"),
            Self::NoPathFound { start, end } => {
                writeln!(f, "No path found from {start} to {end}.")
            }
        }
    }
}

/// Escapes pipes so a value stays inside its table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn join_or(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}
