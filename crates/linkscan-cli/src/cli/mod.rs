//! CLI for the linkscan URL health checker.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkscan_core::config;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_config, run_probe};

/// Top-level CLI for the linkscan URL health checker.
#[derive(Debug, Parser)]
#[command(name = "linkscan")]
#[command(about = "linkscan: sequential URL health checker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Flags that override the configured checker settings for one invocation.
#[derive(Debug, clap::Args)]
pub struct CheckerOverrides {
    /// Allowed root domain; subdomains are included.
    #[arg(long, value_name = "DOMAIN")]
    pub allowed_domain: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<f64>,

    /// Sleep between successive probes, in seconds.
    #[arg(long, value_name = "SECS")]
    pub delay: Option<f64>,

    /// User-Agent header sent with every probe.
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check every URL in a list file and write a JSON report.
    Check {
        /// URL list file: one URL per line, `#` comments allowed.
        input: PathBuf,

        /// Report path (default: `<input stem>_report.json` next to the input).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        overrides: CheckerOverrides,
    },

    /// Probe a single URL (allow-list not applied) and print its record.
    Probe {
        /// HTTP/HTTPS URL to probe.
        url: String,

        #[command(flatten)]
        overrides: CheckerOverrides,
    },

    /// Print the resolved configuration and its file path.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let mut cfg = config::load_or_init()?;
        cfg.apply_env_overrides();
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                input,
                output,
                overrides,
            } => {
                overrides.apply(&mut cfg);
                run_check(&cfg, &input, output.as_deref())?;
            }
            CliCommand::Probe { url, overrides } => {
                overrides.apply(&mut cfg);
                run_probe(&cfg, &url)?;
            }
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

impl CheckerOverrides {
    pub fn apply(&self, cfg: &mut config::LinkscanConfig) {
        if let Some(d) = &self.allowed_domain {
            cfg.allowed_domain = d.clone();
        }
        if let Some(t) = self.timeout {
            cfg.timeout_secs = t;
        }
        if let Some(d) = self.delay {
            cfg.delay_secs = d;
        }
        if let Some(ua) = &self.user_agent {
            cfg.user_agent = ua.clone();
        }
    }
}
