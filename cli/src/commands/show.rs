use std::sync::Arc;

use cli_table::{Cell, CellStruct, ColorChoice, Style, Table, TableStruct};
use tracing::{Instrument, Span};
use turso_common::database::Database;
use turso_common::settings::Settings;
use turso_core::api::ApiClient;
use turso_core::collector::ReportRow;
use turso_core::probe::HttpVersionProbe;
use turso_core::show::{ShowOutcome, ShowService};

use crate::commands::ShowArgs;
use crate::terminal::colors::cells;
use crate::terminal::{format, print, spinner};
use crate::tprint;

const TABLE_HEADERS: [&str; 5] = ["Name", "Type", "Location", "Version", "URL"];

pub async fn show(args: ShowArgs) -> anyhow::Result<()> {
    let settings: Settings = Settings::read()?;
    let catalog: ApiClient = ApiClient::from_settings(&settings)?;
    let prober: HttpVersionProbe = HttpVersionProbe::new(settings.probe_timeout());
    let service: ShowService = ShowService::new(Box::new(catalog), Arc::new(prober));
    let flags = args.flags();

    let outcome: ShowOutcome = if flags.is_single_value() {
        service
            .show(&args.database_name, &settings, &flags, None)
            .await?
    } else {
        let span: Span = spinner::probing_span(&args.database_name);
        let progress = spinner::report_probe_progress(span.clone());
        service
            .show(&args.database_name, &settings, &flags, Some(progress))
            .instrument(span)
            .await?
    };

    match outcome {
        ShowOutcome::Url(url) => print::print(&url),
        ShowOutcome::Report(report) => {
            render_summary(&report.database, &report.url);
            tprint!();
            render_table(&report.rows)?;
        }
    }
    Ok(())
}

fn render_summary(database: &Database, url: &str) {
    let key_width: usize = format::SUMMARY_KEYS.iter().map(|k| k.len()).max().unwrap_or(0);
    for (key, value) in format::summary_fields(database, url) {
        print::aligned_line(key, value, key_width);
    }
}

fn render_table(rows: &[ReportRow]) -> anyhow::Result<()> {
    print::header("Database Instances:");
    let rendered = instance_table(rows).display()?;
    print::print(rendered.to_string().trim_end());
    Ok(())
}

fn instance_table(rows: &[ReportRow]) -> TableStruct {
    let title: Vec<CellStruct> = TABLE_HEADERS
        .into_iter()
        .map(|header| header.cell().bold(true).foreground_color(Some(cells::SECONDARY)))
        .collect();
    let color_choice = if colored::control::SHOULD_COLORIZE.should_colorize() {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };

    instance_rows(rows)
        .table()
        .title(title)
        .color_choice(color_choice)
}

fn instance_rows(rows: &[ReportRow]) -> Vec<Vec<CellStruct>> {
    rows.iter()
        .map(|row| {
            vec![
                row.name.as_str().cell().foreground_color(Some(cells::PRIMARY)),
                row.kind.as_str().cell().foreground_color(Some(cells::TEXT_DEFAULT)),
                row.region.as_str().cell().foreground_color(Some(cells::TEXT_DEFAULT)),
                row.version
                    .as_str()
                    .cell()
                    .foreground_color(Some(format::version_color(&row.version))),
                row.url.as_str().cell().foreground_color(Some(cells::SEPARATOR)),
            ]
        })
        .collect()
}
