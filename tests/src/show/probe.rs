use std::time::Duration;

use turso_core::probe::{LEGACY_VERSION, VersionProbe};

use crate::utils::{FakeServer, Reply, local_probe};

#[tokio::test]
async fn reports_body_of_successful_probe() {
    let server = FakeServer::start(Reply::ok("v1.2.3")).await;
    let version = local_probe(None).fetch_version(&server.base_url()).await;

    assert_eq!(version, "v1.2.3");
    assert!(server.requests()[0].starts_with("get /version http/1.1"));
}

#[tokio::test]
async fn not_found_maps_to_legacy_sentinel() {
    let server = FakeServer::start(Reply::status(404, "no such route")).await;
    let version = local_probe(None).fetch_version(&server.base_url()).await;

    assert_eq!(version, "0.3.1-");
    assert_eq!(version, LEGACY_VERSION);
}

#[tokio::test]
async fn server_error_body_is_reported_as_version() {
    let server = FakeServer::start(Reply::status(500, "internal error")).await;
    let version = local_probe(None).fetch_version(&server.base_url()).await;

    assert_eq!(version, "internal error");
}

#[tokio::test]
async fn version_is_joined_onto_base_path() {
    let server = FakeServer::start(Reply::ok("v2")).await;
    let base = format!("{}/api/", server.base_url());
    local_probe(None).fetch_version(&base).await;

    assert!(server.requests()[0].starts_with("get /api/version http/1.1"));
}

#[tokio::test]
async fn credentials_travel_as_basic_auth() {
    let server = FakeServer::start(Reply::ok("v3")).await;
    let base = format!("http://token:tok@{}", server.addr);
    let version = local_probe(None).fetch_version(&base).await;

    assert_eq!(version, "v3");
    assert!(server.requests()[0].contains("authorization: basic dg9rzw46dg9r"));
}

#[tokio::test]
async fn hung_instance_surfaces_timeout_when_configured() {
    let server = FakeServer::start(Reply::Hang).await;
    let probe = local_probe(Some(Duration::from_millis(200)));
    let version = probe.fetch_version(&server.base_url()).await;

    assert_eq!(version, "fetch failed: timed out after 200ms");
}

#[tokio::test]
async fn unresolvable_host_is_flattened() {
    let version = local_probe(Some(Duration::from_secs(10)))
        .fetch_version("https://ams-orders.invalid")
        .await;
    assert!(version.starts_with("fetch failed: "), "got: {version}");
}

#[tokio::test]
async fn malformed_url_is_flattened() {
    let version = local_probe(None).fetch_version("://missing-scheme").await;
    assert!(version.starts_with("fetch failed: "), "got: {version}");
}
