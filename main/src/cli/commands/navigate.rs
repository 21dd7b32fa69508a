use crate::cli::parse_role;
use clap::Parser;
use portal_core::{routes::base_route, TabNavigator};
use portal_nullable_router::Router;
use std::sync::Arc;

#[derive(Parser)]
pub(crate) struct NavigateArgs {
    /// Id of the pressed tab, e.g. schoolCalendar
    #[arg(long)]
    tab: String,
    /// User category id or role slug of the session
    #[arg(long)]
    role: Option<String>,
    /// Logged with the navigation
    #[arg(long, default_value = "cli")]
    caller: String,
}

impl NavigateArgs {
    pub(crate) fn navigate(&self) {
        let role_id = parse_role(&self.role);
        let router = Arc::new(Router::new(base_route(role_id)));
        let navigator = TabNavigator::new(router.clone());

        navigator.navigate_to_tab(&self.tab, role_id, &self.caller);

        if router.can_go_back() {
            println!("{}", router.current_path());
        } else {
            println!("unknown navigation target: {}", self.tab);
        }
    }
}
