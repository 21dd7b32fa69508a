use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use generate::GenerateArgs;
use show::ShowArgs;

pub(crate) mod generate;
pub(crate) mod show;

#[derive(Subcommand)]
pub(crate) enum ConfigSubcommands {
    /// Writes a shell configuration populated with defaults to stdout
    Generate(GenerateArgs),
    /// Prints the effective shell configuration
    ///
    /// Reads the file given with --config, or config-shell.toml in the data
    /// directory. Missing keys keep their default values.
    Show(ShowArgs),
}

#[derive(Parser)]
pub(crate) struct ConfigCommand {
    #[command(subcommand)]
    pub subcommand: Option<ConfigSubcommands>,
}

impl ConfigCommand {
    pub(crate) fn run(&self) -> Result<()> {
        match &self.subcommand {
            Some(ConfigSubcommands::Generate(args)) => args.generate()?,
            Some(ConfigSubcommands::Show(args)) => args.show()?,
            None => ConfigCommand::command().print_long_help()?,
        }
        Ok(())
    }
}
