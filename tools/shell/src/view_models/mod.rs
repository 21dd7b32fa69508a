mod app_view_model;
mod dynamic_layout_view_model;
mod header_view_model;
mod screen_view_model;
mod tab_bar_view_model;

pub(crate) use app_view_model::*;
pub(crate) use dynamic_layout_view_model::*;
pub(crate) use header_view_model::*;
pub(crate) use screen_view_model::*;
pub(crate) use tab_bar_view_model::*;
