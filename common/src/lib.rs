//! Shared models and ports for the `turso` command line.
//!
//! * **[`database`]**: snapshots of databases and instances returned by the platform.
//! * **[`catalog`]**: the port used to resolve those snapshots.
//! * **[`settings`]**: the on-disk settings store (credentials, schemes, API base).
//! * **[`config`]**: per-invocation command flags.

pub mod catalog;
pub mod config;
pub mod database;
pub mod settings;
