use super::{HeaderViewModel, ScreenViewModel, TabBarViewModel};
use portal_core::{
    navigation_config, resolve_active_tab, role_display_name, RoleId, TabNavigator,
};

pub(crate) const TAB_BAR_CALLER: &str = "bottom_tab_bar";

/// Everything the authenticated shell renders for one frame
pub(crate) struct DynamicLayoutViewModel {
    pub role_id: Option<RoleId>,
    pub header: HeaderViewModel,
    pub screen: ScreenViewModel,
    pub tab_bar: TabBarViewModel,
}

impl DynamicLayoutViewModel {
    pub(crate) fn new(current_path: &str, role_id: Option<RoleId>, can_go_back: bool) -> Self {
        let config = navigation_config(role_id);
        let active_tab = resolve_active_tab(current_path, role_id);
        let tab_bar = TabBarViewModel::new(config, active_tab);
        let title = config
            .tab(active_tab)
            .map(|t| t.title)
            .unwrap_or(role_display_name(role_id));

        Self {
            role_id,
            header: HeaderViewModel::new(title, current_path.to_owned(), role_id, can_go_back),
            screen: ScreenViewModel::new(current_path, config),
            tab_bar,
        }
    }

    pub(crate) fn tab_pressed(&self, navigator: &TabNavigator, tab_id: &str) {
        navigator.navigate_to_tab(tab_id, self.role_id, TAB_BAR_CALLER);
    }
}
