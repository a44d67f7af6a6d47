//! # Database Show Service
//!
//! Implements the `db show` use case.
//!
//! Resolves the database through the [`DatabaseCatalog`], then either returns a
//! single URL (when a single-value flag is set) or lists the instances and probes
//! them through the [`collector`](crate::collector).

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use turso_common::catalog::{CatalogError, DatabaseCatalog};
use turso_common::config::ShowFlags;
use turso_common::database::{Database, Instance};
use turso_common::settings::Settings;

use crate::collector::{self, ProgressCallback, ReportRow};
use crate::probe::VersionProbe;
use crate::urls;

#[derive(Debug, Error)]
pub enum ShowError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("could not get instances of database {database}: {source}")]
    Instances {
        database: String,
        source: CatalogError,
    },
    #[error(
        "instance {instance} was not found for database {database}. List known instances using turso db show {database}"
    )]
    InstanceNotFound { instance: String, database: String },
}

/// Everything the report renderer needs for the full view.
#[derive(Debug, Clone)]
pub struct DatabaseReport {
    pub database: Database,
    /// Data URL without credentials.
    pub url: String,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone)]
pub enum ShowOutcome {
    /// A single URL requested by a flag.
    Url(String),
    Report(DatabaseReport),
}

/// Application service for `db show`.
///
/// Holds the ports it talks through, so tests can swap in fakes for the catalog
/// and the prober.
pub struct ShowService {
    catalog: Box<dyn DatabaseCatalog>,
    prober: Arc<dyn VersionProbe>,
}

impl ShowService {
    pub fn new(catalog: Box<dyn DatabaseCatalog>, prober: Arc<dyn VersionProbe>) -> Self {
        Self { catalog, prober }
    }

    pub async fn show(
        &self,
        name: &str,
        settings: &Settings,
        flags: &ShowFlags,
        on_probe_done: Option<ProgressCallback>,
    ) -> Result<ShowOutcome, ShowError> {
        let database: Database = self.catalog.get_database(name).await?;
        debug!(id = %database.id, "resolved database {}", database.name);

        if flags.url {
            return Ok(ShowOutcome::Url(urls::build_data_url(
                settings,
                &database,
                flags.basic_auth,
            )));
        }

        if flags.http_url {
            return Ok(ShowOutcome::Url(urls::build_http_url(settings, &database)));
        }

        let instances: Vec<Instance> = self
            .catalog
            .list_instances(&database.name)
            .await
            .map_err(|source| ShowError::Instances {
                database: database.name.clone(),
                source,
            })?;

        if let Some(wanted) = flags.instance_url.as_deref() {
            return instance_url(settings, &database, &instances, wanted).map(ShowOutcome::Url);
        }

        info!("probing {} instances of {}", instances.len(), database.name);
        let rows: Vec<ReportRow> = collector::collect_rows(
            settings,
            &database,
            &instances,
            self.prober.clone(),
            on_probe_done,
        )
        .await;

        Ok(ShowOutcome::Report(DatabaseReport {
            url: urls::build_data_url(settings, &database, false),
            database,
            rows,
        }))
    }
}

/// URL of the instance named `wanted`, or an error pointing at the instance listing.
pub fn instance_url(
    settings: &Settings,
    database: &Database,
    instances: &[Instance],
    wanted: &str,
) -> Result<String, ShowError> {
    instances
        .iter()
        .find(|instance| instance.name == wanted)
        .map(|instance| urls::build_instance_url(settings, database, instance))
        .ok_or_else(|| ShowError::InstanceNotFound {
            instance: wanted.to_string(),
            database: database.name.clone(),
        })
}
