use crate::{
    roles::{Role, RoleId},
    tabs::{tab_ids::*, IconFamily, Tab},
};
use serde::Serialize;

/// Bottom bar tabs of one role. Tab order is the rendering order.
#[derive(PartialEq, Eq, Debug, Serialize)]
pub struct NavigationConfig {
    pub role: Role,
    pub tabs: &'static [Tab],
    pub default_tab: &'static str,
}

impl NavigationConfig {
    pub fn tab(&self, id: &str) -> Option<&'static Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn default_tab(&self) -> Option<&'static Tab> {
        self.tab(self.default_tab)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tab(id).is_some()
    }

    pub fn tab_ids(&self) -> impl Iterator<Item = &'static str> {
        self.tabs.iter().map(|t| t.id)
    }
}

impl Role {
    pub fn navigation_config(&self) -> &'static NavigationConfig {
        match self {
            Role::Parent => &PARENT,
            Role::Educator => &EDUCATOR,
            Role::Principal => &PRINCIPAL,
            Role::Admin => &ADMIN,
            Role::Management => &MANAGEMENT,
            Role::SportCoach => &SPORT_COACH,
            Role::Counselor => &COUNSELOR,
            Role::Student => &STUDENT,
        }
    }
}

/// Unregistered roles get the parent's config
pub fn navigation_config(role_id: Option<RoleId>) -> &'static NavigationConfig {
    Role::resolve(role_id).navigation_config()
}

const HOME_TAB: Tab = Tab::new(HOME, "home", IconFamily::Ionicons, "Home", "home");
const DASHBOARD_TAB: Tab = Tab::new(
    DASHBOARD,
    "dashboard",
    IconFamily::MaterialIcons,
    "Dashboard",
    "dashboard",
);
const SCHOOL_CALENDAR_TAB: Tab = Tab::new(
    SCHOOL_CALENDAR,
    "calendar",
    IconFamily::Ionicons,
    "Calendar",
    "school-calendar",
);
const FEEDBACK_TAB: Tab = Tab::new(
    FEEDBACK,
    "chatbubbles",
    IconFamily::Ionicons,
    "Feedback",
    "feedback",
);
const USER_ACTIONS_TAB: Tab = Tab::new(
    USER_ACTIONS,
    "person-circle",
    IconFamily::Ionicons,
    "Profile",
    "user-actions",
);
const ANALYTICS_TAB: Tab = Tab::new(
    ANALYTICS,
    "analytics",
    IconFamily::MaterialIcons,
    "Analytics",
    "analytics",
);

static PARENT: NavigationConfig = NavigationConfig {
    role: Role::Parent,
    tabs: &[
        Tab::new(
            ACTIVITY_FEED,
            "newspaper",
            IconFamily::Ionicons,
            "Activity",
            "activity-feed",
        ),
        SCHOOL_CALENDAR_TAB,
        FEEDBACK_TAB,
        USER_ACTIONS_TAB,
    ],
    default_tab: ACTIVITY_FEED,
};

static EDUCATOR: NavigationConfig = NavigationConfig {
    role: Role::Educator,
    tabs: &[
        HOME_TAB,
        Tab::new(
            ATTENDANCE,
            "fact-check",
            IconFamily::MaterialIcons,
            "Attendance",
            "attendance",
        ),
        SCHOOL_CALENDAR_TAB,
        FEEDBACK_TAB,
        USER_ACTIONS_TAB,
    ],
    default_tab: HOME,
};

static PRINCIPAL: NavigationConfig = NavigationConfig {
    role: Role::Principal,
    tabs: &[
        DASHBOARD_TAB,
        Tab::new(
            EDUCATORS,
            "people",
            IconFamily::Ionicons,
            "Educators",
            "educators",
        ),
        ANALYTICS_TAB,
        SCHOOL_CALENDAR_TAB,
        USER_ACTIONS_TAB,
    ],
    default_tab: DASHBOARD,
};

static ADMIN: NavigationConfig = NavigationConfig {
    role: Role::Admin,
    tabs: &[
        DASHBOARD_TAB,
        Tab::new(
            USERS,
            "manage-accounts",
            IconFamily::MaterialIcons,
            "Users",
            "users",
        ),
        SCHOOL_CALENDAR_TAB,
        USER_ACTIONS_TAB,
    ],
    default_tab: DASHBOARD,
};

static MANAGEMENT: NavigationConfig = NavigationConfig {
    role: Role::Management,
    tabs: &[DASHBOARD_TAB, ANALYTICS_TAB, FEEDBACK_TAB, USER_ACTIONS_TAB],
    default_tab: DASHBOARD,
};

static SPORT_COACH: NavigationConfig = NavigationConfig {
    role: Role::SportCoach,
    tabs: &[
        Tab::new(
            MATCHES,
            "sports-soccer",
            IconFamily::MaterialIcons,
            "Matches",
            "matches",
        ),
        Tab::new(
            PLAYERS,
            "people",
            IconFamily::Ionicons,
            "Players",
            "players",
        ),
        SCHOOL_CALENDAR_TAB,
        USER_ACTIONS_TAB,
    ],
    default_tab: MATCHES,
};

static COUNSELOR: NavigationConfig = NavigationConfig {
    role: Role::Counselor,
    tabs: &[
        HOME_TAB,
        Tab::new(
            STUDENTS,
            "school",
            IconFamily::Ionicons,
            "Students",
            "students",
        ),
        SCHOOL_CALENDAR_TAB,
        USER_ACTIONS_TAB,
    ],
    default_tab: HOME,
};

static STUDENT: NavigationConfig = NavigationConfig {
    role: Role::Student,
    tabs: &[HOME_TAB, SCHOOL_CALENDAR_TAB, USER_ACTIONS_TAB],
    default_tab: HOME,
};
