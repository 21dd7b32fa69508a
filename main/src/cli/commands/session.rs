use crate::cli::describe_role;
use anyhow::Result;
use clap::Parser;
use portal_core::{resolve_active_tab, routes::base_route, Session};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
pub(crate) struct SessionArgs {
    /// Session json as returned by the login endpoint
    #[arg(long)]
    file: PathBuf,
}

impl SessionArgs {
    pub(crate) fn session(&self) -> Result<()> {
        let session = Session::load(&self.file)?;
        let role_id = session.role_id();
        debug!(file = %self.file.display(), ?role_id, "Session loaded");
        let home = base_route(role_id);

        println!("Role: {}", describe_role(role_id));
        if let Some(name) = &session.name {
            println!("Name: {}", name);
        }
        if let Some(email) = &session.email {
            println!("Email: {}", email);
        }
        println!("Home: {}", home);
        println!("Active tab: {}", resolve_active_tab(&home, role_id));
        Ok(())
    }
}
