mod app;
mod icons;
mod view_models;
mod views;

use anyhow::{anyhow, Result};
use app::ShellApp;
use clap::Parser;
use eframe::egui;
use portal_core::{config::ShellConfig, RoleId, Session};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use views::AppView;

#[derive(Parser)]
#[command(name = "portal-shell", version, about = "School portal shell")]
struct Args {
    /// Path of the shell config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Session json file, overrides session_file from the config
    #[arg(long)]
    session: Option<PathBuf>,
    /// User category to start with, overrides the session
    #[arg(long)]
    role: Option<RoleId>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = ShellConfig::load(args.config.as_deref())?;
    init_logging(&config.log_level);

    let session = load_session(&args, &config);
    info!(role_id = ?session.role_id(), "Starting portal shell");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };
    let app = ShellApp::new(config, session);
    eframe::run_native(
        "School Portal",
        options,
        Box::new(|_| Ok(Box::new(AppView::new(app)))),
    )
    .map_err(|e| anyhow!("could not start the shell: {e}"))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A session that cannot be read degrades to "no session", the parent experience
fn load_session(args: &Args, config: &ShellConfig) -> Session {
    let mut session = match args.session.as_ref().or(config.session_file.as_ref()) {
        Some(path) => Session::load(path).unwrap_or_else(|e| {
            warn!("Ignoring session file: {:#}", e);
            Session::default()
        }),
        None => Session::default(),
    };
    if let Some(role_id) = args.role {
        session.user_category = Some(role_id);
    }
    session
}
