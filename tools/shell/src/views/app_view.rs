use super::{DynamicLayout, HeaderView, ScreenView};
use crate::{app::ShellApp, view_models::AppViewModel};
use eframe::egui;

pub(crate) struct AppView {
    model: AppViewModel,
}

impl AppView {
    pub(crate) fn new(app: ShellApp) -> Self {
        Self {
            model: AppViewModel::new(app),
        }
    }
}

impl eframe::App for AppView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let layout = self.model.layout();
        let mut header_action = None;

        DynamicLayout::new(&layout, &self.model.app.navigator).show(
            ctx,
            |ui| header_action = HeaderView::new(&layout.header).show(ui),
            |ui| ScreenView::new(&layout.screen).show(ui),
        );

        if let Some(action) = header_action {
            self.model.apply(action);
        }
    }
}
