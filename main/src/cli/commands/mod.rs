pub(crate) mod config;
pub(crate) mod navigate;
pub(crate) mod resolve;
pub(crate) mod roles;
pub(crate) mod session;
pub(crate) mod tabs;
