use super::WindowToml;
use crate::config::ShellConfig;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ShellToml {
    pub log_level: Option<String>,
    pub start_path: Option<String>,
    pub session_file: Option<String>,
    pub window: Option<WindowToml>,
}

impl ShellToml {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl From<&ShellConfig> for ShellToml {
    fn from(value: &ShellConfig) -> Self {
        Self {
            log_level: Some(value.log_level.clone()),
            start_path: Some(value.start_path.clone()),
            session_file: value
                .session_file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            window: Some((&value.window).into()),
        }
    }
}
