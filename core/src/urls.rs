//! Endpoint URLs for databases and their instances.
//!
//! Every builder here is pure: the same settings and snapshots always produce the
//! same string. Credentials are percent-encoded into the user-info component.

use turso_common::database::{Database, Instance};
use turso_common::settings::{Credentials, Settings};
use url::Url;

/// Data-plane URL of a database, optionally carrying basic-auth credentials.
pub fn build_data_url(settings: &Settings, database: &Database, basic_auth: bool) -> String {
    let creds = basic_auth
        .then(|| settings.credentials_for(&database.id))
        .flatten();
    compose(&settings.data_scheme, creds.as_ref(), &database.hostname)
}

/// HTTP API URL of a database. Always authenticated when credentials exist.
pub fn build_http_url(settings: &Settings, database: &Database) -> String {
    let creds = settings.credentials_for(&database.id);
    compose(&settings.http_scheme, creds.as_ref(), &database.hostname)
}

/// Data-plane URL of one instance. Never carries credentials.
pub fn build_instance_url(settings: &Settings, database: &Database, instance: &Instance) -> String {
    compose(&settings.data_scheme, None, &instance_host(database, instance))
}

/// HTTP API URL of one instance, the base of its `/version` probe.
pub fn build_instance_http_url(
    settings: &Settings,
    database: &Database,
    instance: &Instance,
) -> String {
    let creds = settings.credentials_for(&database.id);
    compose(
        &settings.http_scheme,
        creds.as_ref(),
        &instance_host(database, instance),
    )
}

/// Host reported by the platform, or `<instance>-<database host>` when it reports none.
fn instance_host(database: &Database, instance: &Instance) -> String {
    match instance.hostname.as_deref().filter(|h| !h.is_empty()) {
        Some(host) => host.to_string(),
        None => format!("{}-{}", instance.name, database.hostname),
    }
}

fn compose(scheme: &str, creds: Option<&Credentials>, host: &str) -> String {
    let plain: String = format!("{scheme}://{host}");
    let Some(creds) = creds else {
        return plain;
    };
    let Ok(mut url) = Url::parse(&plain) else {
        return plain;
    };
    if url.set_username(&creds.username).is_err()
        || url.set_password(Some(&creds.password)).is_err()
    {
        return plain;
    }

    // special schemes serialize an empty path as "/"
    let root_path: bool = url.path() == "/";
    let mut composed: String = url.into();
    if root_path && composed.ends_with('/') {
        composed.pop();
    }
    composed
}
