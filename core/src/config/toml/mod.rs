mod shell_toml;
mod window_toml;

pub use shell_toml::*;
pub use window_toml::*;
