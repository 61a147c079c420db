//! Command line for registering the AI Developer assistant.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Register the AI Developer assistant and print its id
#[derive(Parser, Debug)]
#[command(name = "ai-developer-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model to back the assistant
    #[arg(short, long)]
    pub model: Option<String>,

    /// Assistant name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print the tool schema set as JSON and exit
    #[arg(long)]
    pub print_schema: bool,

    /// Record the created id as AI_ASSISTANT_ID in this dotenv file
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve settings: defaults, then the config file, then the
    /// environment read through `lookup`, then command-line flags.
    pub fn resolve_config<F>(&self, lookup: F) -> crate::error::Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        let mut config = base.with_env(lookup);
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        config.check()?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
