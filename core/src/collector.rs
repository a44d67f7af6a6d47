//! # Instance Report Collector
//!
//! Fans one version probe out per instance and joins the results back in the
//! order the instances were listed.
//!
//! Each probe runs in its own task and hands its single result back through that
//! task's join handle. The handles are awaited by index, so a slow instance delays
//! the rows after it but never reorders them. Tasks share no result state.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::task::JoinHandle;
use tracing::{debug, warn};
use turso_common::database::{Database, Instance};
use turso_common::settings::Settings;

use crate::probe::{ProbeError, VersionOutcome, VersionProbe};
use crate::urls;

/// Called with the number of finished probes each time one completes.
pub type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// One line of the instance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub name: String,
    pub kind: String,
    pub region: String,
    pub version: String,
    pub url: String,
}

/// Probes every instance concurrently; the result has one row per instance, in input order.
pub async fn collect_rows(
    settings: &Settings,
    database: &Database,
    instances: &[Instance],
    prober: Arc<dyn VersionProbe>,
    on_probe_done: Option<ProgressCallback>,
) -> Vec<ReportRow> {
    let finished: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut slots: Vec<(String, JoinHandle<String>)> = Vec::with_capacity(instances.len());

    for instance in instances {
        let url: String = urls::build_instance_url(settings, database, instance);
        let http_url: String = urls::build_instance_http_url(settings, database, instance);
        let prober = prober.clone();
        let finished = finished.clone();
        let callback = on_probe_done.clone();

        let handle: JoinHandle<String> = tokio::spawn(async move {
            let version: String = prober.fetch_version(&http_url).await;
            let done: usize = finished.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(cb) = callback {
                cb(done);
            }
            version
        });
        slots.push((url, handle));
    }
    debug!(probes = slots.len(), "version probes dispatched");

    let mut rows: Vec<ReportRow> = Vec::with_capacity(instances.len());
    for (instance, (url, handle)) in instances.iter().zip(slots) {
        let version: String = match handle.await {
            Ok(version) => version,
            Err(e) => {
                warn!("version probe for instance {} aborted: {}", instance.name, e);
                VersionOutcome::Failed(ProbeError::Aborted(e.to_string())).to_string()
            }
        };
        rows.push(ReportRow {
            name: instance.name.clone(),
            kind: instance.kind.clone(),
            region: instance.region.clone(),
            version,
            url,
        });
    }
    rows
}
