use crate::view_models::ScreenViewModel;
use eframe::egui::Ui;

pub(crate) struct ScreenView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> ScreenView<'a> {
    pub(crate) fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }

    pub fn show(&self, ui: &mut Ui) {
        ui.heading(&self.model.heading);
        ui.add_space(20.0);
        ui.label(&self.model.path);
        if !self.model.registered {
            ui.weak("This route has no tab of its own");
        }
    }
}
