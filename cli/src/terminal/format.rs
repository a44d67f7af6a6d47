use cli_table::Color;
use turso_common::database::Database;
use turso_core::probe::LEGACY_VERSION;

use crate::terminal::colors::cells;

pub const SUMMARY_KEYS: [&str; 4] = ["Name", "URL", "ID", "Locations"];

/// Region codes sorted lexicographically and comma-joined.
pub fn locations(database: &Database) -> String {
    database.sorted_regions().join(", ")
}

/// Summary fields in display order: Name, URL, ID, Locations.
pub fn summary_fields(database: &Database, url: &str) -> Vec<(&'static str, String)> {
    let values: [String; 4] = [
        database.name.clone(),
        url.to_string(),
        database.id.clone(),
        locations(database),
    ];
    SUMMARY_KEYS.into_iter().zip(values).collect()
}

pub fn version_color(version: &str) -> Color {
    if version.starts_with("fetch failed:") {
        cells::FAILURE
    } else if version == LEGACY_VERSION {
        cells::LEGACY
    } else {
        cells::TEXT_DEFAULT
    }
}
