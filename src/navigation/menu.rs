use crate::session::SessionSnapshot;
use crate::session::roles::{ADMIN, SUPER_ADMIN, TEACHER};

/// Sidebar entry. An empty `roles` list means every signed-in user sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
    pub roles: &'static [&'static str],
}

impl NavItem {
    /// Display filter only; route guards are what enforce access.
    pub fn is_visible(&self, session: &SessionSnapshot) -> bool {
        self.roles.is_empty() || session.has_any_role(self.roles)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavItem],
}

/// A group with only the items the session may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleGroup {
    pub label: &'static str,
    pub items: Vec<&'static NavItem>,
}

const ADMIN_AND_TEACHER: &[&str] = &[ADMIN, TEACHER];
const ADMINS: &[&str] = &[ADMIN, SUPER_ADMIN];

static MENU: [NavGroup; 4] = [
    NavGroup {
        label: "Dashboard",
        items: &[NavItem {
            label: "Overview",
            icon: "dashboard",
            route: "/dashboard",
            roles: &[],
        }],
    },
    NavGroup {
        label: "User Management",
        items: &[
            NavItem {
                label: "Students",
                icon: "school",
                route: "/students",
                roles: ADMIN_AND_TEACHER,
            },
            NavItem {
                label: "Staff",
                icon: "people",
                route: "/staff",
                roles: ADMINS,
            },
        ],
    },
    NavGroup {
        label: "Academic",
        items: &[
            NavItem {
                label: "Classes",
                icon: "class",
                route: "/classes",
                roles: ADMIN_AND_TEACHER,
            },
            NavItem {
                label: "Subjects",
                icon: "menu_book",
                route: "/classes/subjects",
                roles: ADMIN_AND_TEACHER,
            },
            NavItem {
                label: "Timetable",
                icon: "schedule",
                route: "/timetable",
                roles: ADMIN_AND_TEACHER,
            },
            NavItem {
                label: "Exams",
                icon: "assignment",
                route: "/exams",
                roles: ADMIN_AND_TEACHER,
            },
            NavItem {
                label: "Promotions",
                icon: "trending_up",
                route: "/promotions",
                roles: ADMINS,
            },
        ],
    },
    NavGroup {
        label: "Settings",
        items: &[
            NavItem {
                label: "Profile",
                icon: "person",
                route: "/profile",
                roles: &[],
            },
            NavItem {
                label: "Settings",
                icon: "settings",
                route: "/settings",
                roles: ADMINS,
            },
        ],
    },
];

pub fn default_menu() -> &'static [NavGroup] {
    &MENU
}

/// Looks up the menu entry for a route.
pub fn find_item(route: &str) -> Option<&'static NavItem> {
    MENU.iter()
        .flat_map(|group| group.items.iter())
        .find(|item| item.route == route)
}

/// Menu filtered for `session`; groups with nothing visible are dropped.
pub fn visible_menu(session: &SessionSnapshot) -> Vec<VisibleGroup> {
    MENU.iter()
        .map(|group| VisibleGroup {
            label: group.label,
            items: group
                .items
                .iter()
                .filter(|item| item.is_visible(session))
                .collect(),
        })
        .filter(|group| !group.items.is_empty())
        .collect()
}
