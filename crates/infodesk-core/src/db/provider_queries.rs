//! Provider lookups.

use log::debug;
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result},
    models::Provider,
};

const SELECT_PROVIDER_SQL: &str = "SELECT p.FirstName, p.LastName, t.Acronym, l.LocationName FROM Provider p LEFT JOIN ProviderTitle t ON t.ProviderID = p.ProviderID LEFT JOIN Office o ON o.ProviderID = p.ProviderID LEFT JOIN Location l ON l.LocationID = o.LocationID WHERE p.ProviderID = ?1 ORDER BY t.rowid, o.rowid";

impl super::Database {
    /// Retrieves a provider with their titles and office locations.
    ///
    /// The joined rows form a cross product of titles and offices, so both
    /// lists are folded back with repeats removed.
    pub fn get_provider(&self, id: i64) -> Result<Option<Provider>> {
        debug!("Looking up provider {id}");

        let mut stmt = self
            .connection
            .prepare(SELECT_PROVIDER_SQL)
            .db_context("Failed to prepare query")?;

        let mut rows = stmt
            .query(params![id])
            .db_context("Failed to query provider")?;

        let mut provider: Option<Provider> = None;
        while let Some(row) = rows.next().db_context("Failed to read provider row")? {
            if provider.is_none() {
                let first_name: String = row.get(0).db_context("Failed to read first name")?;
                let last_name: String = row.get(1).db_context("Failed to read last name")?;
                provider = Some(Provider::new(id, first_name, last_name));
            }

            let title: Option<String> = row.get(2).db_context("Failed to read title")?;
            let location: Option<String> = row.get(3).db_context("Failed to read location")?;

            if let Some(current) = provider.as_mut() {
                if let Some(title) = title {
                    current.add_title(title);
                }
                if let Some(location) = location {
                    current.add_location(location);
                }
            }
        }

        Ok(provider)
    }
}
