use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{self as fmt_layer, FmtContext, FormatEvent};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

const DEFAULT_FILTER: &str = "warn";
const ERROR_SYMBOL: &str = "[-]";

pub struct TursoFormatter;

impl<S, N> FormatEvent<S, N> for TursoFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => (ERROR_SYMBOL, |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Log events go to stderr through the progress-bar aware writer, filtered by `RUST_LOG`.
///
/// Spans only get a spinner when they carry `indicatif.pb_show`.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt = fmt_layer::layer()
        .event_format(TursoFormatter)
        .with_writer(indicatif_layer.get_stderr_writer())
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(fmt)
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}

/// The line a fatal error is reported with, styled like an error event.
pub fn fatal_line(err: &anyhow::Error) -> String {
    format!("{} {err:#}", ERROR_SYMBOL.red().bold())
}

/// Writes a fatal error straight to stderr. `RUST_LOG` cannot silence it.
pub fn report_fatal(err: &anyhow::Error) {
    eprintln!("{}", fatal_line(err));
}
