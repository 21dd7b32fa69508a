use anyhow::Result;
use clap::Parser;
use portal_core::config::ShellConfig;

#[derive(Parser)]
pub(crate) struct GenerateArgs {}

impl GenerateArgs {
    pub(crate) fn generate(&self) -> Result<()> {
        print!("{}", ShellConfig::default().to_toml_string()?);
        Ok(())
    }
}
