use portal_core::{routes::tab_for_path, NavigationConfig};

/// Placeholder content for the routed screen
pub(crate) struct ScreenViewModel {
    pub heading: String,
    pub path: String,
    pub registered: bool,
}

impl ScreenViewModel {
    pub(crate) fn new(path: &str, config: &NavigationConfig) -> Self {
        let tab = tab_for_path(path).and_then(|id| config.tab(id));
        Self {
            heading: tab.map(|t| t.title).unwrap_or("Screen").to_owned(),
            path: path.to_owned(),
            registered: tab_for_path(path).is_some(),
        }
    }
}
