use super::ShellToml;
use crate::working_path::working_path;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const SHELL_CONFIG_FILE: &str = "config-shell.toml";

#[derive(Clone, PartialEq, Debug)]
pub struct ShellConfig {
    /// Default tracing filter, `RUST_LOG` takes precedence
    pub log_level: String,
    /// Path the router starts at when no session has been resolved yet
    pub start_path: String,
    pub session_file: Option<PathBuf>,
    pub window: WindowConfig,
}

#[derive(Clone, PartialEq, Debug)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 780.0,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            start_path: "/authenticated/parent".to_owned(),
            session_file: None,
            window: WindowConfig::default(),
        }
    }
}

impl ShellConfig {
    pub fn default_path() -> Option<PathBuf> {
        working_path().map(|mut path| {
            path.push(SHELL_CONFIG_FILE);
            path
        })
    }

    /// Defaults overlaid with the file at `path`. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut config = Self::default();
        if !path.exists() {
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let toml = ShellToml::parse(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        config.merge_toml(&toml);
        Ok(config)
    }

    /// Loads from `path` or from the default location
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) => Self::load_from(path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn merge_toml(&mut self, toml: &ShellToml) {
        if let Some(level) = &toml.log_level {
            self.log_level = level.clone();
        }
        if let Some(path) = &toml.start_path {
            self.start_path = path.clone();
        }
        if let Some(file) = &toml.session_file {
            self.session_file = Some(PathBuf::from(file));
        }
        if let Some(window) = &toml.window {
            self.window.merge_toml(window);
        }
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        ShellToml::from(self).to_toml_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn merge_partial_file() {
        let toml = ShellToml::parse(
            r#"
            log_level = "debug"

            [window]
            width = 500.0
            "#,
        )
        .unwrap();

        let mut config = ShellConfig::default();
        config.merge_toml(&toml);

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.width, 500.0);
        assert_eq!(config.window.height, WindowConfig::default().height);
        assert_eq!(config.start_path, ShellConfig::default().start_path);
    }

    #[test]
    fn session_file() {
        let toml = ShellToml::parse(r#"session_file = "/tmp/session.json""#).unwrap();
        let mut config = ShellConfig::default();
        config.merge_toml(&toml);
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/session.json")));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = ShellConfig::load_from("/definitely/not/here/config-shell.toml").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn load_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            start_path = "/authenticated/educator"
            session_file = "/tmp/session.json"

            [window]
            height = 1000.0
            "#
        )
        .unwrap();

        let config = ShellConfig::load_from(file.path()).unwrap();

        assert_eq!(config.start_path, "/authenticated/educator");
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/session.json")));
        assert_eq!(config.window.height, 1000.0);
        assert_eq!(config.window.width, WindowConfig::default().width);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "start_path = [").unwrap();

        let err = ShellConfig::load_from(file.path()).unwrap_err();

        assert!(err.to_string().starts_with("invalid config file"));
    }

    #[test]
    fn load_with_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "log_level = \"debug\"").unwrap();

        let config = ShellConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn generated_file_round_trips() {
        let mut config = ShellConfig::default();
        config.session_file = Some(PathBuf::from("/tmp/s.json"));
        config.window.height = 900.0;

        let text = config.to_toml_string().unwrap();
        let mut parsed = ShellConfig::default();
        parsed.merge_toml(&ShellToml::parse(&text).unwrap());

        assert_eq!(parsed, config);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ShellToml::parse("colour = \"blue\"").is_err());
    }
}
