use crate::cli::parse_role;
use clap::Parser;
use portal_core::resolve_active_tab;

#[derive(Parser)]
pub(crate) struct ResolveArgs {
    /// Current path, e.g. /authenticated/admin/users
    #[arg(long)]
    path: String,
    /// User category id or role slug of the session
    #[arg(long)]
    role: Option<String>,
}

impl ResolveArgs {
    pub(crate) fn resolve(&self) {
        println!("{}", resolve_active_tab(&self.path, parse_role(&self.role)));
    }
}
