//! Role based navigation for the school portal.
//!
//! Static per-role tab tables, the resolver that picks the highlighted tab for
//! a path and the dispatcher that turns tab presses into router pushes.

mod active_tab;
pub mod config;
mod dispatcher;
mod navigation_config;
mod roles;
pub mod routes;
mod session;
pub mod tabs;
mod working_path;

pub use active_tab::resolve_active_tab;
pub use dispatcher::{target_route, NavigationEvent, TabNavigator};
pub use navigation_config::{navigation_config, NavigationConfig};
pub use roles::{role_display_name, role_id_from_slug, role_slug, Role, RoleId};
pub use session::Session;
pub use tabs::{IconFamily, Tab};
pub use working_path::{working_path, APP_PATH_VAR};
