use portal_core::{role_display_name, Role, RoleId};

pub(crate) struct HeaderViewModel {
    pub title: &'static str,
    pub role_name: &'static str,
    pub path: String,
    pub can_go_back: bool,
    pub roles: Vec<RoleOption>,
}

impl HeaderViewModel {
    pub(crate) fn new(
        title: &'static str,
        path: String,
        role_id: Option<RoleId>,
        can_go_back: bool,
    ) -> Self {
        let current = role_id.and_then(Role::from_id);
        let mut roles = vec![RoleOption {
            label: "No session",
            role: None,
            selected: current.is_none(),
        }];
        roles.extend(Role::all().map(|role| RoleOption {
            label: role.display_name(),
            role: Some(role),
            selected: current == Some(role),
        }));

        Self {
            title,
            role_name: role_display_name(role_id),
            path,
            can_go_back,
            roles,
        }
    }

    pub fn selected_role_label(&self) -> &'static str {
        self.roles
            .iter()
            .find(|r| r.selected)
            .map(|r| r.label)
            .unwrap_or("No session")
    }
}

pub(crate) struct RoleOption {
    pub label: &'static str,
    pub role: Option<Role>,
    pub selected: bool,
}
