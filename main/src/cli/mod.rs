use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{
    config::ConfigCommand, navigate::NavigateArgs, resolve::ResolveArgs, roles::RolesArgs,
    session::SessionArgs, tabs::TabsArgs,
};
use portal_core::{config::ShellConfig, role_id_from_slug, Role, RoleId};

mod commands;

#[derive(Parser)]
#[command(name = "portal", version, about = "School portal navigation tools")]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG overrides it.
    /// The default is the shell's; config-shell.toml itself is not read here.
    #[arg(long, global = true, default_value_t = ShellConfig::default().log_level)]
    pub log_level: String,

    /// Writes log lines as json
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub(crate) fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Roles(args)) => args.roles(),
            Some(Commands::Tabs(args)) => args.tabs()?,
            Some(Commands::Resolve(args)) => args.resolve(),
            Some(Commands::Navigate(args)) => args.navigate(),
            Some(Commands::Session(args)) => args.session()?,
            Some(Commands::Config(command)) => command.run()?,
            None => Cli::command().print_long_help()?,
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Lists all registered roles
    Roles(RolesArgs),
    /// Prints the bottom bar tabs of a role
    Tabs(TabsArgs),
    /// Prints the tab that is highlighted for a path
    Resolve(ResolveArgs),
    /// Prints the route a tab press leads to
    Navigate(NavigateArgs),
    /// Normalizes a session json file
    Session(SessionArgs),
    /// Commands related to the shell config
    Config(ConfigCommand),
}

/// Accepts a numeric user category or a role slug
pub(crate) fn parse_role(role: &Option<String>) -> Option<RoleId> {
    let role = role.as_deref()?.trim();
    match role.parse::<RoleId>() {
        Ok(id) => Some(id),
        Err(_) => Some(role_id_from_slug(role)),
    }
}

pub(crate) fn describe_role(role_id: Option<RoleId>) -> String {
    match role_id.and_then(Role::from_id) {
        Some(role) => format!("{} ({})", role.display_name(), role.id()),
        None => format!(
            "unregistered, using {} ({})",
            Role::DEFAULT.display_name(),
            Role::DEFAULT.id()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numeric_role() {
        assert_eq!(parse_role(&Some("4".to_owned())), Some(4));
        assert_eq!(parse_role(&Some("9999".to_owned())), Some(9999));
    }

    #[test]
    fn parse_slug_role() {
        assert_eq!(parse_role(&Some("sport_coach".to_owned())), Some(6));
        assert_eq!(parse_role(&Some("janitor".to_owned())), Some(1));
    }

    #[test]
    fn no_role() {
        assert_eq!(parse_role(&None), None);
    }

    #[test]
    fn describe_roles() {
        assert_eq!(describe_role(Some(4)), "Admin (4)");
        assert_eq!(describe_role(None), "unregistered, using Parent (1)");
    }

    #[test]
    fn log_level_defaults_to_shell_config() {
        let cli = Cli::parse_from(["portal", "roles"]);
        assert_eq!(cli.log_level, ShellConfig::default().log_level);

        let cli = Cli::parse_from(["portal", "--log-level", "debug", "roles"]);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
