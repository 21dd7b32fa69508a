use crate::{
    roles::RoleId,
    routes::{base_route, route_suffix},
};
use portal_nullable_router::Router;
use portal_output_tracker::{OutputListenerMt, OutputTrackerMt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Route a tab press leads to, or None if the tab id is unknown
pub fn target_route(tab_id: &str, role_id: Option<RoleId>) -> Option<String> {
    route_suffix(tab_id).map(|suffix| format!("{}{}", base_route(role_id), suffix))
}

/// Turns tab presses into router pushes
pub struct TabNavigator {
    router: Arc<Router>,
    navigation_listener: OutputListenerMt<NavigationEvent>,
}

impl TabNavigator {
    pub fn new(router: Arc<Router>) -> Self {
        Self {
            router,
            navigation_listener: OutputListenerMt::new(),
        }
    }

    pub fn new_null() -> Self {
        Self::new(Arc::new(Router::new_null()))
    }

    /// Fire and forget. An unknown tab id is logged and ignored.
    pub fn navigate_to_tab(&self, tab_id: &str, role_id: Option<RoleId>, caller: &str) {
        let Some(route) = target_route(tab_id, role_id) else {
            warn!(tab_id, ?role_id, caller, "Unknown navigation target");
            return;
        };

        debug!(
            tab_id,
            ?role_id,
            caller,
            from = %self.router.current_path(),
            to = %route,
            "Navigating to tab"
        );

        if self.navigation_listener.is_tracked() {
            self.navigation_listener.emit(NavigationEvent {
                tab_id: tab_id.to_owned(),
                route: route.clone(),
                caller: caller.to_owned(),
            });
        }
        self.router.push(route);
    }

    pub fn router(&self) -> &Arc<Router> {
        &self.router
    }

    pub fn track(&self) -> Arc<OutputTrackerMt<NavigationEvent>> {
        self.navigation_listener.track()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavigationEvent {
    pub tab_id: String,
    pub route: String,
    pub caller: String,
}
