/// Flags accepted by `db show`, resolved once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowFlags {
    /// Print only the database URL and stop.
    ///
    /// Instances are never listed when this is set.
    pub url: bool,
    /// Print only the database HTTP API URL and stop.
    pub http_url: bool,
    /// Embed credentials in the URL printed by `url`.
    pub basic_auth: bool,
    /// Print only the URL of the instance with this name.
    pub instance_url: Option<String>,
}

impl ShowFlags {
    /// True when the command resolves a single value instead of the full report.
    pub fn is_single_value(&self) -> bool {
        self.url || self.http_url || self.instance_url.is_some()
    }
}
