use std::sync::Arc;

use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;
use turso_core::collector::ProgressCallback;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Span whose progress bar spins while the database is resolved and its instances probed.
pub fn probing_span(database_name: &str) -> Span {
    let span: Span = info_span!("probing", indicatif.pb_show = true);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        span.pb_set_style(&style.tick_strings(TICK_STRINGS));
    }
    span.pb_set_message(&format!("Resolving {}...", database_name.bold()));
    span
}

pub fn report_probe_progress(span: Span) -> ProgressCallback {
    Arc::new(move |done: usize| {
        span.pb_set_message(&format!(
            "Probed {} instances so far...",
            done.to_string().green().bold()
        ));
    })
}
