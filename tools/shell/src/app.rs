use portal_core::{
    config::ShellConfig,
    routes::{base_route, normalize_path},
    Role, RoleId, Session, TabNavigator,
};
use portal_nullable_router::Router;
use std::sync::Arc;
use tracing::info;

pub(crate) struct ShellApp {
    pub router: Arc<Router>,
    pub navigator: TabNavigator,
    pub session: Session,
}

impl ShellApp {
    pub fn new(config: ShellConfig, session: Session) -> Self {
        let start_path = match session.role_id() {
            Some(role_id) => base_route(Some(role_id)),
            None => config.start_path,
        };
        let router = Arc::new(Router::new(start_path));
        Self {
            navigator: TabNavigator::new(router.clone()),
            router,
            session,
        }
    }

    pub fn role_id(&self) -> Option<RoleId> {
        self.session.role_id()
    }

    /// Router path without query, fragment or trailing slash
    pub fn current_path(&self) -> String {
        normalize_path(&self.router.current_path()).to_owned()
    }

    /// Replaces the session role and jumps to the new role's home
    pub fn switch_role(&mut self, role: Option<Role>) {
        self.session.user_category = role.map(|r| r.id());
        info!(role_id = ?self.role_id(), "Session role changed");
        self.router.push(base_route(self.role_id()));
    }

    pub fn back(&self) {
        self.router.back();
    }
}
