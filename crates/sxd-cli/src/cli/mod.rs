//! CLI for the sxd developer asset tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sxd_core::config;

use commands::{run_checksums, run_config, run_icon, run_verify, IconOverrides};

/// Top-level CLI for sxd.
#[derive(Debug, Parser)]
#[command(name = "sxd")]
#[command(about = "sxd: placeholder app icons and attribution checksums", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/sxd/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate app_icon.png and app_icon_foreground.png.
    Icon {
        /// Directory to write the icons into (default: current directory).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Label to draw.
        #[arg(long)]
        text: Option<String>,
        /// Canvas size in pixels.
        #[arg(long, value_name = "PX")]
        size: Option<u32>,
        /// Font file to try before the configured ones. May be repeated.
        #[arg(long = "font", value_name = "PATH")]
        fonts: Vec<PathBuf>,
    },

    /// Print SHA-256 digests of the attribution strings and the master key.
    Checksums,

    /// Check that TEXT hashes to DIGEST (hex or byte-array literal).
    Verify {
        /// String to hash.
        text: String,
        /// Expected digest.
        digest: String,
    },

    /// Show the config path and effective settings.
    Config {
        /// Write the default config file if none exists.
        #[arg(long)]
        init: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg_path = match cli.config {
            Some(p) => p,
            None => config::config_path()?,
        };

        match cli.command {
            CliCommand::Icon {
                out_dir,
                text,
                size,
                fonts,
            } => {
                let cfg = config::load(&cfg_path)?;
                tracing::debug!("loaded config: {:?}", cfg.icon);
                let overrides = IconOverrides {
                    out_dir,
                    text,
                    size,
                    fonts,
                };
                run_icon(cfg.icon, overrides)?;
            }
            CliCommand::Checksums => {
                let cfg = config::load(&cfg_path)?;
                run_checksums(&cfg.checksums);
            }
            CliCommand::Verify { text, digest } => run_verify(&text, &digest)?,
            CliCommand::Config { init } => run_config(&cfg_path, init)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
