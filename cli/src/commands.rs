pub mod show;

use clap::{Args, Parser, Subcommand};
use turso_common::config::ShowFlags;

#[derive(Parser)]
#[command(name = "turso")]
#[command(about = "Manage databases on the Turso platform.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage databases
    #[command(alias = "database")]
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Subcommand)]
pub enum DbCommands {
    /// Show information from a database
    #[command(alias = "s")]
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub database_name: String,
    /// Show URL for the database.
    #[arg(long)]
    pub url: bool,
    /// Show URL for the database HTTP API.
    #[arg(long)]
    pub http_url: bool,
    /// Show basic authentication in the URL.
    #[arg(long)]
    pub basic_auth: bool,
    /// Show URL for a selected instance of a database, selected by instance name.
    #[arg(long, value_name = "INSTANCE")]
    pub instance_url: Option<String>,
}

impl ShowArgs {
    pub fn flags(&self) -> ShowFlags {
        ShowFlags {
            url: self.url,
            http_url: self.http_url,
            basic_auth: self.basic_auth,
            instance_url: self.instance_url.clone(),
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
