use super::TabBarView;
use crate::view_models::DynamicLayoutViewModel;
use eframe::egui::{self, CentralPanel, TopBottomPanel, Ui};
use portal_core::TabNavigator;

/// Header, routed content and bottom tab bar, shared by all roles
pub(crate) struct DynamicLayout<'a> {
    model: &'a DynamicLayoutViewModel,
    navigator: &'a TabNavigator,
}

impl<'a> DynamicLayout<'a> {
    pub(crate) fn new(model: &'a DynamicLayoutViewModel, navigator: &'a TabNavigator) -> Self {
        Self { model, navigator }
    }

    pub fn show(
        &self,
        ctx: &egui::Context,
        header: impl FnOnce(&mut Ui),
        content: impl FnOnce(&mut Ui),
    ) {
        TopBottomPanel::top("header_panel").show(ctx, header);

        TopBottomPanel::bottom("tab_bar_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(tab_id) = TabBarView::new(&self.model.tab_bar).show(ui) {
                self.model.tab_pressed(self.navigator, tab_id);
            }
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, content);
    }
}
