use crate::roles::{Role, RoleId};
use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Normalized login session. The navigation core only ever sees [`Session::role_id`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Session {
    pub user_category: Option<RoleId>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_category: Option<RoleId>) -> Self {
        Self {
            user_category,
            ..Default::default()
        }
    }

    pub fn for_role(role: Role) -> Self {
        Self::new(Some(role.id()))
    }

    /// Accepts both `{ "data": { "user_category": .. } }` and a flat
    /// `{ "user_category": .. }` payload. The nested value wins if present.
    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        let raw: RawSession =
            serde_json::from_value(value).context("session payload is not an object")?;
        Ok(raw.into())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(json).context("invalid session json")?;
        Self::from_value(value)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("could not read session file {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn role_id(&self) -> Option<RoleId> {
        self.user_category
    }

    /// Registered role, falling back to the default role
    pub fn role(&self) -> Role {
        Role::resolve(self.user_category)
    }
}

#[derive(Deserialize, Default)]
struct RawSession {
    #[serde(default)]
    data: Option<Value>,
    #[serde(flatten)]
    user: RawUser,
}

#[derive(Deserialize, Default)]
struct RawUser {
    #[serde(default)]
    user_category: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    email: Option<Value>,
}

impl From<RawSession> for Session {
    fn from(raw: RawSession) -> Self {
        // `data` only counts when it is an object
        let nested: RawUser = match raw.data {
            Some(data @ Value::Object(_)) => serde_json::from_value(data).unwrap_or_default(),
            _ => RawUser::default(),
        };
        Self {
            user_category: category(&nested.user_category).or(category(&raw.user.user_category)),
            name: text(&nested.name).or(text(&raw.user.name)),
            email: text(&nested.email).or(text(&raw.user.email)),
        }
    }
}

/// Zero, null and anything that is not an integer count as missing
fn category(value: &Option<Value>) -> Option<RoleId> {
    let id = match value.as_ref()? {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<RoleId>().ok()?,
        _ => return None,
    };
    (id != 0).then_some(id)
}

fn text(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
