mod shell_config;
mod toml;

pub use shell_config::*;
pub use self::toml::*;
