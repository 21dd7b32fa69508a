use crate::{
    roles::{role_slug, Role, RoleId},
    tabs::tab_ids::*,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every role's route group lives below this prefix
pub const AUTHENTICATED_ROOT: &str = "/authenticated";

/// Old paths that still arrive through deep links
static LEGACY_PATH_ALIASES: [(&str, &str); 5] = [
    ("/authenticated/parent/school-life", ACTIVITY_FEED),
    ("/authenticated/educator/school-life", HOME),
    ("/authenticated/sport-coach/matches", MATCHES),
    ("/authenticated/sport-coach/players", PLAYERS),
    ("/authenticated/admin/user-management", USERS),
];

/// Tab id -> route suffix, independent of the role
static TAB_ROUTE_SUFFIXES: [(&str, &str); 14] = [
    (ACTIVITY_FEED, "/activity-feed"),
    (SCHOOL_LIFE, "/school-life"),
    (HOME, "/home"),
    (DASHBOARD, "/dashboard"),
    (SCHOOL_CALENDAR, "/school-calendar"),
    (FEEDBACK, "/feedback"),
    (ATTENDANCE, "/attendance"),
    (USER_ACTIONS, "/user-actions"),
    (USERS, "/users"),
    (EDUCATORS, "/educators"),
    (ANALYTICS, "/analytics"),
    (MATCHES, "/matches"),
    (PLAYERS, "/players"),
    (STUDENTS, "/students"),
];

static PATH_TO_TAB: Lazy<HashMap<String, &'static str>> = Lazy::new(build_path_table);

static SUFFIX_BY_TAB: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TAB_ROUTE_SUFFIXES.iter().copied().collect());

fn build_path_table() -> HashMap<String, &'static str> {
    let mut table = HashMap::new();
    for role in Role::all() {
        let config = role.navigation_config();
        let base = role_base_route(role);
        for tab in config.tabs {
            table.insert(format!("{}/{}", base, tab.route), tab.id);
        }
        table.insert(base, config.default_tab);
    }
    for (path, tab_id) in LEGACY_PATH_ALIASES {
        table.insert(path.to_owned(), tab_id);
    }
    table
}

fn role_base_route(role: Role) -> String {
    format!("{}/{}", AUTHENTICATED_ROOT, role.slug())
}

/// `/authenticated/<slug>` with the usual fallback to the parent role
pub fn base_route(role_id: Option<RoleId>) -> String {
    format!("{}/{}", AUTHENTICATED_ROOT, role_slug(role_id))
}

/// Exact lookup in the global path table
pub fn tab_for_path(path: &str) -> Option<&'static str> {
    PATH_TO_TAB.get(path).copied()
}

pub fn route_suffix(tab_id: &str) -> Option<&'static str> {
    SUFFIX_BY_TAB.get(tab_id).copied()
}

/// Every path known to the resolver, sorted
pub fn mapped_paths() -> Vec<(&'static str, &'static str)> {
    let mut paths: Vec<_> = PATH_TO_TAB
        .iter()
        .map(|(path, tab)| (path.as_str(), *tab))
        .collect();
    paths.sort();
    paths
}

pub fn legacy_aliases() -> &'static [(&'static str, &'static str)] {
    &LEGACY_PATH_ALIASES
}

/// Drops query string, fragment and trailing slashes. The root path stays `/`.
/// Lookups do not normalize; hosts apply this before handing a path over.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}
