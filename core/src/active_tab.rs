use crate::{
    roles::{Role, RoleId},
    routes::tab_for_path,
    tabs::tab_ids::*,
};
use tracing::trace;

/// Tab to highlight for the current path.
///
/// A mapped path always wins, even when it belongs to a different role than
/// the session's. Paths missing from the table fall back to a per-role tab,
/// so a tab is highlighted on every screen.
pub fn resolve_active_tab(current_path: &str, role_id: Option<RoleId>) -> &'static str {
    if let Some(tab_id) = tab_for_path(current_path) {
        return tab_id;
    }

    let fallback = Role::resolve(role_id).fallback_tab();
    trace!(
        path = current_path,
        ?role_id,
        tab = fallback,
        "No tab mapped for path, using role fallback"
    );
    fallback
}

impl Role {
    pub fn fallback_tab(&self) -> &'static str {
        match self {
            Role::Parent => ACTIVITY_FEED,
            Role::Educator => HOME,
            Role::Principal => DASHBOARD,
            Role::Admin => DASHBOARD,
            Role::Management => DASHBOARD,
            Role::SportCoach => MATCHES,
            Role::Counselor => HOME,
            Role::Student => HOME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation_config;

    #[test]
    fn mapped_path() {
        assert_eq!(
            resolve_active_tab("/authenticated/admin/users", Some(Role::Admin.id())),
            USERS
        );
    }

    #[test]
    fn legacy_alias() {
        assert_eq!(
            resolve_active_tab(
                "/authenticated/parent/school-life",
                Some(Role::Parent.id())
            ),
            ACTIVITY_FEED
        );
    }

    #[test]
    fn role_fallback_on_unmapped_path() {
        assert_eq!(
            resolve_active_tab("/some/unregistered/path", Some(Role::Educator.id())),
            HOME
        );
        assert_eq!(
            resolve_active_tab("/some/unregistered/path", Some(Role::Admin.id())),
            DASHBOARD
        );
    }

    #[test]
    fn unknown_role_uses_parent_fallback() {
        assert_eq!(resolve_active_tab("/nowhere", Some(9999)), ACTIVITY_FEED);
        assert_eq!(resolve_active_tab("/nowhere", None), ACTIVITY_FEED);
    }

    #[test]
    fn path_wins_over_stale_role() {
        assert_eq!(
            resolve_active_tab("/authenticated/admin/users", Some(Role::Parent.id())),
            USERS
        );
    }

    #[test]
    fn sport_coach_matches() {
        assert_eq!(
            resolve_active_tab(
                "/authenticated/sport_coach/matches",
                Some(Role::SportCoach.id())
            ),
            MATCHES
        );
    }

    #[test]
    fn fallback_tab_belongs_to_role_config() {
        for role in Role::all() {
            assert!(
                role.navigation_config().contains(role.fallback_tab()),
                "{:?}",
                role
            );
        }
    }

    #[test]
    fn every_tab_path_resolves_to_its_tab() {
        for role in Role::all() {
            let config = navigation_config(Some(role.id()));
            for tab in config.tabs {
                let path = format!("/authenticated/{}/{}", role.slug(), tab.route);
                assert_eq!(resolve_active_tab(&path, Some(role.id())), tab.id);
            }
        }
    }

    #[test]
    fn decorated_paths_miss_the_table() {
        assert_eq!(
            resolve_active_tab("/authenticated/educator/feedback/", Some(Role::Parent.id())),
            ACTIVITY_FEED
        );
        assert_eq!(
            resolve_active_tab("/authenticated/admin/users?page=2", Some(Role::Parent.id())),
            ACTIVITY_FEED
        );
        assert_eq!(
            resolve_active_tab("/authenticated/educator/feedback/", Some(Role::Educator.id())),
            HOME
        );
    }
}
