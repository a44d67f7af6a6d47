//! Behaviour behind `turso db show`.
//!
//! * **[`urls`]**: pure endpoint URL builders.
//! * **[`probe`]**: the per-instance `/version` probe.
//! * **[`collector`]**: concurrent fan-out of probes with ordered fan-in.
//! * **[`show`]**: the use case tying catalog, URLs and probes together.
//! * **[`api`]**: the platform API adapter for the catalog port.

pub mod api;
pub mod collector;
pub mod probe;
pub mod show;
pub mod urls;
