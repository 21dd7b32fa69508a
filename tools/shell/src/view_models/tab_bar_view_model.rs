use crate::icons::icon_glyph;
use portal_core::{NavigationConfig, Tab};

pub(crate) struct TabBarViewModel {
    pub tabs: Vec<TabViewModel>,
}

impl TabBarViewModel {
    /// At most one tab is selected. None is when the active tab
    /// belongs to another role's config.
    pub(crate) fn new(config: &NavigationConfig, active_tab: &str) -> Self {
        let tabs = config
            .tabs
            .iter()
            .map(|tab| {
                let mut model = TabViewModel::from(tab);
                model.selected = tab.id == active_tab;
                model
            })
            .collect();
        Self { tabs }
    }

    pub fn selected_tab(&self) -> Option<&'static str> {
        self.tabs.iter().find(|t| t.selected).map(|t| t.value)
    }
}

pub(crate) struct TabViewModel {
    pub selected: bool,
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

impl From<&Tab> for TabViewModel {
    fn from(tab: &Tab) -> Self {
        Self {
            selected: false,
            icon: icon_glyph(tab.icon_family, tab.icon),
            label: tab.title,
            value: tab.id,
        }
    }
}
