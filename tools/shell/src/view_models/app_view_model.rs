use super::DynamicLayoutViewModel;
use crate::app::ShellApp;
use portal_core::Role;

/// Requests raised by the header. The layout itself never changes the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum HeaderAction {
    Back,
    SwitchRole(Option<Role>),
}

pub(crate) struct AppViewModel {
    pub app: ShellApp,
}

impl AppViewModel {
    pub(crate) fn new(app: ShellApp) -> Self {
        Self { app }
    }

    /// Sampled once per frame from the router and the session
    pub(crate) fn layout(&self) -> DynamicLayoutViewModel {
        DynamicLayoutViewModel::new(
            &self.app.current_path(),
            self.app.role_id(),
            self.app.router.can_go_back(),
        )
    }

    pub(crate) fn apply(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::Back => self.app.back(),
            HeaderAction::SwitchRole(role) => {
                if role.map(|r| r.id()) != self.app.role_id() {
                    self.app.switch_role(role);
                }
            }
        }
    }
}
