use num::FromPrimitive;
use num_derive::FromPrimitive;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// The integer user category stored in a session
pub type RoleId = i64;

#[derive(
    FromPrimitive, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Parent = 1,
    Educator = 2,
    Principal = 3,
    Admin = 4,
    Management = 5,
    SportCoach = 6,
    Counselor = 7,
    Student = 8,
}

impl Role {
    /// Used whenever a role id is unknown or not loaded yet
    pub const DEFAULT: Role = Role::Parent;

    pub fn id(&self) -> RoleId {
        *self as RoleId
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Educator => "educator",
            Role::Principal => "principal",
            Role::Admin => "admin",
            Role::Management => "management",
            Role::SportCoach => "sport_coach",
            Role::Counselor => "counselor",
            Role::Student => "student",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Parent => "Parent",
            Role::Educator => "Educator",
            Role::Principal => "Principal",
            Role::Admin => "Admin",
            Role::Management => "Management",
            Role::SportCoach => "Sport Coach",
            Role::Counselor => "Counselor",
            Role::Student => "Student",
        }
    }

    /// Registered role for the id, if any
    pub fn from_id(role_id: RoleId) -> Option<Role> {
        FromPrimitive::from_i64(role_id)
    }

    pub fn from_slug(slug: &str) -> Option<Role> {
        Role::iter().find(|r| r.slug() == slug)
    }

    /// Maps unknown and absent ids to [`Role::DEFAULT`]
    pub fn resolve(role_id: Option<RoleId>) -> Role {
        role_id.and_then(Role::from_id).unwrap_or(Role::DEFAULT)
    }

    pub fn all() -> impl Iterator<Item = Role> {
        Role::iter()
    }
}

pub fn role_slug(role_id: Option<RoleId>) -> &'static str {
    Role::resolve(role_id).slug()
}

pub fn role_display_name(role_id: Option<RoleId>) -> &'static str {
    Role::resolve(role_id).display_name()
}

pub fn role_id_from_slug(slug: &str) -> RoleId {
    Role::from_slug(slug).unwrap_or(Role::DEFAULT).id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        assert_eq!(Role::Parent.id(), 1);
        assert_eq!(Role::Educator.id(), 2);
        assert_eq!(Role::Admin.id(), 4);
        assert_eq!(Role::SportCoach.id(), 6);
        assert_eq!(Role::Student.id(), 8);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(Role::from_id(3), Some(Role::Principal));
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(-1), None);
        assert_eq!(Role::from_id(9999), None);
    }

    #[test]
    fn slugs_and_names() {
        assert_eq!(role_slug(Some(6)), "sport_coach");
        assert_eq!(role_display_name(Some(6)), "Sport Coach");
        assert_eq!(role_slug(Some(7)), "counselor");
    }

    #[test]
    fn unknown_role_falls_back_to_parent() {
        assert_eq!(role_slug(Some(9999)), "parent");
        assert_eq!(role_display_name(Some(-5)), "Parent");
        assert_eq!(role_slug(None), "parent");
        assert_eq!(role_display_name(None), "Parent");
        assert_eq!(Role::default(), Role::DEFAULT);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(role_id_from_slug("admin"), 4);
        assert_eq!(role_id_from_slug("sport_coach"), 6);
    }

    #[test]
    fn unknown_slug_falls_back_to_parent() {
        assert_eq!(role_id_from_slug("janitor"), Role::Parent.id());
        assert_eq!(role_id_from_slug(""), Role::Parent.id());
        assert_eq!(role_id_from_slug("Admin"), Role::Parent.id());
    }

    #[test]
    fn slug_round_trip_is_stable() {
        for role in Role::all() {
            let slug = role_slug(Some(role.id()));
            assert_eq!(role_slug(Some(role_id_from_slug(slug))), slug);
        }
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = Role::all().map(|r| r.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), Role::all().count());
    }

    #[test]
    fn all_roles_in_id_order() {
        let ids: Vec<_> = Role::all().map(|r| r.id()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
