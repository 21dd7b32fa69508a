use std::path::PathBuf;

pub const APP_PATH_VAR: &str = "PORTAL_APP_PATH";

/// Data directory of the portal tools. `PORTAL_APP_PATH` overrides the default.
pub fn working_path() -> Option<PathBuf> {
    if let Ok(path_override) = std::env::var(APP_PATH_VAR) {
        eprintln!(
            "Application path overridden by {APP_PATH_VAR} environment variable: {path_override}"
        );
        return Some(path_override.into());
    }

    dirs::home_dir().map(|mut path| {
        path.push("SchoolPortal");
        path
    })
}
