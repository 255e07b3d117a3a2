//! Command-line and environment configuration.
//!
//! Every setting has a flag, an environment variable, and a default suitable
//! for local development.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::http::HttpServerConfig;

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Parser)]
#[command(name = "contactlist", version, about = "Contact list service and terminal client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Open the interactive contact shell against a running server
    Shell(ShellArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub http: HttpServerConfig,
}

#[derive(Debug, Clone, Args)]
pub struct ShellArgs {
    /// Base URL of the contact list server
    #[arg(long, env = "CONTACTLIST_URL", default_value = DEFAULT_SERVER_URL)]
    pub url: String,
}

/// Where the contact store lives.
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    /// Directory holding the database file
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST", default_value = ".data")]
    pub host: PathBuf,

    /// Database name; the file is `<name>.db`
    #[arg(id = "db_name", long = "db-name", env = "DB_NAME", default_value = "contactdb")]
    pub name: String,

    /// Encryption key, applied with `PRAGMA key` on SQLCipher builds
    #[arg(id = "db_pass", long = "db-pass", env = "DB_PASS", hide_env_values = true)]
    pub password: Option<String>,
}

impl DatabaseConfig {
    pub fn database_path(&self) -> PathBuf {
        self.host.join(format!("{}.db", self.name))
    }
}
