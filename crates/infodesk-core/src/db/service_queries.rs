//! Service lookups and location updates.

use log::info;
use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, DirectoryError, Result},
    models::{Location, Service},
};

const SELECT_SERVICE_SQL: &str = "SELECT s.ServiceName, s.HealthType, l.LocationName, l.FloorID FROM Services s LEFT JOIN ResidesIn r ON r.ServiceName = s.ServiceName LEFT JOIN Location l ON l.LocationID = r.LocationID WHERE s.ServiceName = ?1";
const SELECT_LOCATION_BY_NAME_SQL: &str = "SELECT LocationID, LocationName, FloorID FROM Location WHERE LocationName = ?1 ORDER BY LocationID LIMIT 1";
const CHECK_SERVICE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM Services WHERE ServiceName = ?1)";
const UPSERT_RESIDES_IN_SQL: &str = "INSERT INTO ResidesIn (ServiceName, LocationID) VALUES (?1, ?2) ON CONFLICT(ServiceName) DO UPDATE SET LocationID = excluded.LocationID";

impl super::Database {
    /// Retrieves a service and the location it resides in.
    pub fn get_service(&self, name: &str) -> Result<Option<Service>> {
        Self::query_service(&self.connection, name)
    }

    /// Moves a service to the named location and returns the updated service.
    pub fn update_service_location(&mut self, service: &str, location: &str) -> Result<Service> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_SERVICE_EXISTS_SQL, params![service], |row| row.get(0))
            .db_context("Failed to check service existence")?;
        if !exists {
            return Err(DirectoryError::ServiceNotFound {
                name: service.to_string(),
            });
        }

        let target = Self::query_location(&tx, location)?.ok_or_else(|| {
            DirectoryError::LocationNotFound {
                name: location.to_string(),
            }
        })?;

        tx.execute(UPSERT_RESIDES_IN_SQL, params![service, target.id])
            .db_context("Failed to update service location")?;

        let updated = Self::query_service(&tx, service)?.ok_or_else(|| {
            DirectoryError::ServiceNotFound {
                name: service.to_string(),
            }
        })?;

        tx.commit().db_context("Failed to commit transaction")?;

        info!(
            "Moved service {service:?} to location {} ({:?})",
            target.id, target.name
        );
        Ok(updated)
    }

    fn query_service(connection: &Connection, name: &str) -> Result<Option<Service>> {
        connection
            .query_row(SELECT_SERVICE_SQL, params![name], |row| {
                Ok(Service {
                    name: row.get(0)?,
                    health_type: row.get(1)?,
                    location: row.get(2)?,
                    floor: row.get(3)?,
                })
            })
            .optional()
            .db_context("Failed to query service")
    }

    /// When several locations share a name, the one with the lowest ID wins.
    fn query_location(connection: &Connection, name: &str) -> Result<Option<Location>> {
        connection
            .query_row(SELECT_LOCATION_BY_NAME_SQL, params![name], |row| {
                Ok(Location {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    floor: row.get(2)?,
                })
            })
            .optional()
            .db_context("Failed to query location")
    }
}

#[cfg(test)]
mod tests {
    use crate::{db::Database, error::DirectoryError};

    fn seeded_db() -> Database {
        let mut db = Database::open_in_memory().expect("Failed to open database");
        db.execute_script(
            "INSERT INTO Location VALUES (1, 'East Wing', '1'), (2, 'West Wing', '3');
             INSERT INTO Services VALUES ('Radiology', 'Imaging'), ('Pharmacy', 'Dispensary');
             INSERT INTO ResidesIn VALUES ('Radiology', 1);",
        )
        .expect("Failed to seed database");
        db
    }

    #[test]
    fn test_get_service_with_location() {
        let db = seeded_db();

        let service = db
            .get_service("Radiology")
            .expect("Failed to query service")
            .expect("Service should exist");

        assert_eq!(service.health_type.as_deref(), Some("Imaging"));
        assert_eq!(service.location.as_deref(), Some("East Wing"));
        assert_eq!(service.floor.as_deref(), Some("1"));
    }

    #[test]
    fn test_get_service_without_location() {
        let db = seeded_db();

        let service = db
            .get_service("Pharmacy")
            .expect("Failed to query service")
            .expect("Service should exist");

        assert!(service.location.is_none());
        assert!(service.floor.is_none());
    }

    #[test]
    fn test_update_moves_existing_service() {
        let mut db = seeded_db();

        let service = db
            .update_service_location("Radiology", "West Wing")
            .expect("Failed to update service");

        assert_eq!(service.location.as_deref(), Some("West Wing"));
        assert_eq!(service.floor.as_deref(), Some("3"));
    }

    #[test]
    fn test_update_assigns_unplaced_service() {
        let mut db = seeded_db();

        db.update_service_location("Pharmacy", "East Wing")
            .expect("Failed to update service");

        let service = db
            .get_service("Pharmacy")
            .expect("Failed to query service")
            .expect("Service should exist");
        assert_eq!(service.location.as_deref(), Some("East Wing"));
    }

    #[test]
    fn test_update_unknown_location_leaves_service_unchanged() {
        let mut db = seeded_db();

        let err = db
            .update_service_location("Radiology", "Basement")
            .expect_err("Unknown location should fail");
        assert!(matches!(err, DirectoryError::LocationNotFound { ref name } if name == "Basement"));

        let service = db
            .get_service("Radiology")
            .expect("Failed to query service")
            .expect("Service should exist");
        assert_eq!(service.location.as_deref(), Some("East Wing"));
    }

    #[test]
    fn test_update_matches_location_name_exactly() {
        let mut db = seeded_db();

        let err = db
            .update_service_location("Radiology", "west wing")
            .expect_err("Case-folded name should not match");
        assert!(matches!(err, DirectoryError::LocationNotFound { .. }));
    }

    #[test]
    fn test_update_uses_lowest_id_for_duplicate_location_name() {
        let mut db = seeded_db();
        db.execute_script(
            "INSERT INTO Location VALUES (9, 'Annex', '5'), (-4, 'Annex', 'B2');",
        )
        .expect("Failed to add locations");

        let service = db
            .update_service_location("Pharmacy", "Annex")
            .expect("Failed to update service");
        assert_eq!(service.floor.as_deref(), Some("B2"));
    }

    #[test]
    fn test_update_unknown_service() {
        let mut db = seeded_db();

        let err = db
            .update_service_location("Cardiology", "East Wing")
            .expect_err("Unknown service should fail");
        assert!(matches!(err, DirectoryError::ServiceNotFound { .. }));
    }
}
