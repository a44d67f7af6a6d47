//! Cross-crate tests for `db show`: catalog fakes, probe fakes and a local HTTP server.

#[cfg(test)]
mod utils;
