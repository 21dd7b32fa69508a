mod app_view;
mod dynamic_layout;
mod header_view;
mod screen_view;
mod tab_bar_view;

pub(crate) use app_view::*;
pub(crate) use dynamic_layout::*;
pub(crate) use header_view::*;
pub(crate) use screen_view::*;
pub(crate) use tab_bar_view::*;
