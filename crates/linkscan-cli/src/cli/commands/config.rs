//! `linkscan config` – print the resolved configuration.

use anyhow::Result;
use linkscan_core::config::{self, LinkscanConfig};

pub fn run_config(cfg: &LinkscanConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
