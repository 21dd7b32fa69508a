use crate::cli::{describe_role, parse_role};
use anyhow::Result;
use clap::Parser;
use portal_core::navigation_config;

#[derive(Parser)]
pub(crate) struct TabsArgs {
    /// User category id or role slug. Unknown roles show the parent tabs.
    #[arg(long)]
    role: Option<String>,
    /// Prints the config as json
    #[arg(long)]
    json: bool,
}

impl TabsArgs {
    pub(crate) fn tabs(&self) -> Result<()> {
        let role_id = parse_role(&self.role);
        let config = navigation_config(role_id);

        if self.json {
            println!("{}", serde_json::to_string_pretty(config)?);
            return Ok(());
        }

        println!("Role: {}", describe_role(role_id));
        for tab in config.tabs {
            let marker = if tab.id == config.default_tab { "*" } else { " " };
            println!(
                "{} {:<16} {:<14} {:<18} {}:{}",
                marker,
                tab.id,
                tab.title,
                tab.route,
                tab.icon_family.as_str(),
                tab.icon
            );
        }
        Ok(())
    }
}
