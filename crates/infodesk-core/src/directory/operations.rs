//! Report and update operations for the Directory.

use log::info;

use super::Directory;
use crate::{
    error::{DirectoryError, Result},
    models::{PathOutcome, Provider, Service},
    params::{LoadScript, PathQuery, ProviderLookup, ServiceLookup, UpdateServiceLocation},
    resolver::resolve_and_describe,
};

impl Directory {
    /// Retrieves a provider with their titles and office locations.
    pub async fn provider_info(&self, params: &ProviderLookup) -> Result<Option<Provider>> {
        let id = params.id;
        self.with_db(move |db| db.get_provider(id)).await
    }

    /// Retrieves a service with its location and floor.
    pub async fn service_info(&self, params: &ServiceLookup) -> Result<Option<Service>> {
        let name = params.name.clone();
        self.with_db(move |db| db.get_service(&name)).await
    }

    /// Resolves the shortest stored path between two named locations.
    ///
    /// An unknown pair yields `PathOutcome::NoPathFound`, not an error.
    pub async fn shortest_path(&self, params: &PathQuery) -> Result<PathOutcome> {
        let start = params.start.clone();
        let end = params.end.clone();
        self.with_db(move |db| resolve_and_describe(&*db, &start, &end))
            .await
    }

    /// Moves a service to the named location.
    pub async fn update_service_location(&self, params: &UpdateServiceLocation) -> Result<Service> {
        let service = params.service.clone();
        let location = params.location.clone();
        self.with_db(move |db| db.update_service_location(&service, &location))
            .await
    }

    /// Executes a SQL script file against the database.
    pub async fn load_script(&self, params: &LoadScript) -> Result<()> {
        let path = params.path.clone();
        let script_path = path.clone();

        self.with_db(move |db| {
            let sql = std::fs::read_to_string(&script_path).map_err(|e| {
                DirectoryError::FileSystem {
                    path: script_path.clone(),
                    source: e,
                }
            })?;
            db.execute_script(&sql)
        })
        .await?;

        info!("Loaded SQL script {}", path.display());
        Ok(())
    }
}
