use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{render, serve};

#[derive(Parser)]
#[command(name = "ficore")]
#[command(about = "Ficore Africa home page server and renderer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Settings file (TOML, YAML or JSON)
        ///
        /// Values can also be set with FICORE_* environment variables,
        /// e.g. FICORE_DEFAULT_LOCALE=ha.
        #[arg(short, long, env = "FICORE_CONFIG")]
        config: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,
    },
    /// Render the home page once and write the HTML to a file or stdout
    ///
    /// Fails if any linked route cannot be resolved.
    Render {
        /// Settings file (TOML, YAML or JSON)
        #[arg(short, long, env = "FICORE_CONFIG")]
        config: Option<PathBuf>,

        /// Language code (en, ha); defaults to the configured locale
        #[arg(short, long)]
        locale: Option<String>,

        /// Course list (YAML or JSON) to render instead of the configured one
        #[arg(long)]
        courses: Option<PathBuf>,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { config, bind_address } => {
                serve(config.as_deref(), bind_address.as_deref()).await?;
            }
            Commands::Render {
                config,
                locale,
                courses,
                output,
            } => {
                render(
                    config.as_deref(),
                    locale.as_deref(),
                    courses.as_deref(),
                    output.as_deref(),
                )
                .await?;
            }
        }
        Ok(())
    }
}
