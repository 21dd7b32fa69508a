use crate::config::WindowConfig;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl WindowConfig {
    pub(crate) fn merge_toml(&mut self, toml: &WindowToml) {
        if let Some(width) = toml.width {
            self.width = width;
        }
        if let Some(height) = toml.height {
            self.height = height;
        }
    }
}

impl From<&WindowConfig> for WindowToml {
    fn from(value: &WindowConfig) -> Self {
        Self {
            width: Some(value.width),
            height: Some(value.height),
        }
    }
}
