use anyhow::Result;
use clap::Parser;
use portal_core::config::ShellConfig;
use std::path::PathBuf;

#[derive(Parser)]
pub(crate) struct ShowArgs {
    /// Path of the config file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ShowArgs {
    pub(crate) fn show(&self) -> Result<()> {
        let config = ShellConfig::load(self.config.as_deref())?;
        print!("{}", config.to_toml_string()?);
        Ok(())
    }
}
