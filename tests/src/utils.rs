use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use turso_common::catalog::{CatalogError, DatabaseCatalog};
use turso_common::database::{Database, Instance};
use turso_core::probe::{HttpVersionProbe, VersionProbe};

pub fn database(hostname: &str, regions: &[&str]) -> Database {
    Database {
        name: "orders".into(),
        id: "db-1".into(),
        hostname: hostname.into(),
        regions: regions.iter().map(|r| r.to_string()).collect(),
        primary_region: regions.first().map(|r| r.to_string()),
    }
}

pub fn instance(name: &str, kind: &str, region: &str) -> Instance {
    Instance {
        uuid: None,
        name: name.into(),
        kind: kind.into(),
        region: region.into(),
        hostname: None,
    }
}

// ─── Fake HTTP server ────────────────────────────────────────────

#[derive(Clone)]
pub enum Reply {
    Respond { status: u16, body: String },
    /// Accepts the connection and never answers.
    Hang,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::Respond {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Reply::Respond {
            status,
            body: body.to_string(),
        }
    }
}

pub struct FakeServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    pub async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(handle(stream, reply.clone(), seen.clone()));
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw request heads received so far, lowercased.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(mut stream: TcpStream, reply: Reply, seen: Arc<Mutex<Vec<String>>>) {
    let head: String = read_head(&mut stream).await;
    seen.lock().unwrap().push(head.to_lowercase());

    match reply {
        Reply::Hang => {
            std::future::pending::<()>().await;
            drop(stream);
        }
        Reply::Respond { status, body } => {
            let response = format!(
                "HTTP/1.1 {status} {}\r\ncontent-length: {}\r\ncontent-type: text/plain\r\nconnection: close\r\n\r\n{body}",
                reason(status),
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    }
}

async fn read_head(stream: &mut TcpStream) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") && buf.len() < 16 * 1024 {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

// ─── Fake catalog ────────────────────────────────────────────────

pub struct FakeCatalog {
    pub database: Option<Database>,
    pub instances: Result<Vec<Instance>, String>,
    pub list_calls: Arc<AtomicUsize>,
}

impl FakeCatalog {
    pub fn new(database: Database, instances: Vec<Instance>) -> Self {
        Self {
            database: Some(database),
            instances: Ok(instances),
            list_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl DatabaseCatalog for FakeCatalog {
    async fn get_database(&self, name: &str) -> Result<Database, CatalogError> {
        self.database
            .clone()
            .filter(|db| db.name == name)
            .ok_or_else(|| CatalogError::DatabaseNotFound {
                name: name.to_string(),
            })
    }

    async fn list_instances(&self, _database_name: &str) -> Result<Vec<Instance>, CatalogError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.instances.clone().map_err(CatalogError::Request)
    }
}

// ─── Fake probes ─────────────────────────────────────────────────

/// Sleeps for a per-host delay, then reports `v-<instance host>`; records completion order.
pub struct DelayedProbe {
    delays: HashMap<String, Duration>,
    pub completed: Arc<Mutex<Vec<String>>>,
}

impl DelayedProbe {
    pub fn new(delays: &[(&str, u64)]) -> Self {
        Self {
            delays: delays
                .iter()
                .map(|(host, ms)| (host.to_string(), Duration::from_millis(*ms)))
                .collect(),
            completed: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl VersionProbe for DelayedProbe {
    async fn fetch_version(&self, base_url: &str) -> String {
        let host: &str = base_url.rsplit('/').next().unwrap_or(base_url);
        let host: &str = host.rsplit('@').next().unwrap_or(host);
        if let Some(delay) = self.delays.get(host) {
            tokio::time::sleep(*delay).await;
        }
        self.completed.lock().unwrap().push(host.to_string());
        format!("v-{host}")
    }
}

/// Never answers for hosts listed in `hanging`; answers `v1` for the rest.
pub struct HangingProbe {
    pub hanging: Vec<String>,
}

#[async_trait]
impl VersionProbe for HangingProbe {
    async fn fetch_version(&self, base_url: &str) -> String {
        if self.hanging.iter().any(|h| base_url.contains(h.as_str())) {
            std::future::pending::<()>().await;
        }
        "v1".to_string()
    }
}

/// Sends each instance's probe to a local server picked by instance host.
pub struct RoutedProbe {
    pub probe: HttpVersionProbe,
    pub routes: Vec<(String, String)>,
}

#[async_trait]
impl VersionProbe for RoutedProbe {
    async fn fetch_version(&self, base_url: &str) -> String {
        let target: &str = self
            .routes
            .iter()
            .find(|(host, _)| base_url.contains(host.as_str()))
            .map(|(_, target)| target.as_str())
            .unwrap_or(base_url);
        self.probe.fetch_version(target).await
    }
}

/// Client that ignores proxy settings from the environment, for talking to [`FakeServer`].
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub fn local_probe(timeout: Option<Duration>) -> HttpVersionProbe {
    HttpVersionProbe::with_client(local_client(), timeout)
}
