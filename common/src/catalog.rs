//! # Database Catalog Port
//!
//! The boundary through which the command resolves databases and their instances.
//! The platform HTTP client implements it in production; tests provide fakes.

use async_trait::async_trait;
use thiserror::Error;

use crate::database::{Database, Instance};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("database {name} not found. List known databases using turso db list")]
    DatabaseNotFound { name: String },
    #[error("user not logged in, please set TURSO_API_TOKEN or run turso auth login")]
    NotLoggedIn,
    #[error("unauthorized, the API token was rejected")]
    Unauthorized,
    #[error("platform API responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("invalid platform API URL: {0}")]
    InvalidUrl(String),
    #[error("request to platform API failed: {0}")]
    Request(String),
}

#[async_trait]
pub trait DatabaseCatalog: Send + Sync {
    /// Resolves a database by name.
    async fn get_database(&self, name: &str) -> Result<Database, CatalogError>;

    /// Lists the instances of a database in the order the platform returns them.
    async fn list_instances(&self, database_name: &str) -> Result<Vec<Instance>, CatalogError>;
}
