use serde::Serialize;

/// Tab ids shared by the navigation tables
pub mod tab_ids {
    pub const ACTIVITY_FEED: &str = "activityFeed";
    pub const SCHOOL_LIFE: &str = "schoolLife";
    pub const HOME: &str = "home";
    pub const DASHBOARD: &str = "dashboard";
    pub const SCHOOL_CALENDAR: &str = "schoolCalendar";
    pub const FEEDBACK: &str = "feedback";
    pub const ATTENDANCE: &str = "attendance";
    pub const USER_ACTIONS: &str = "userActions";
    pub const USERS: &str = "users";
    pub const EDUCATORS: &str = "educators";
    pub const ANALYTICS: &str = "analytics";
    pub const MATCHES: &str = "matches";
    pub const PLAYERS: &str = "players";
    pub const STUDENTS: &str = "students";
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum IconFamily {
    Ionicons,
    MaterialIcons,
}

impl IconFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconFamily::Ionicons => "Ionicons",
            IconFamily::MaterialIcons => "MaterialIcons",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Tab {
    pub id: &'static str,
    pub icon: &'static str,
    pub icon_family: IconFamily,
    pub title: &'static str,
    /// Path segment below the role's base route
    pub route: &'static str,
}

impl Tab {
    pub const fn new(
        id: &'static str,
        icon: &'static str,
        icon_family: IconFamily,
        title: &'static str,
        route: &'static str,
    ) -> Self {
        Self {
            id,
            icon,
            icon_family,
            title,
            route,
        }
    }
}
