use crate::{
    icons::icon_glyph,
    view_models::{HeaderAction, HeaderViewModel},
};
use eframe::egui::{Button, ComboBox, Ui};
use portal_core::IconFamily;

pub(crate) struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub(crate) fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }

    pub fn show(&self, ui: &mut Ui) -> Option<HeaderAction> {
        let mut action = None;
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            let back = Button::new(icon_glyph(IconFamily::Ionicons, "arrow-back"));
            if ui.add_enabled(self.model.can_go_back, back).clicked() {
                action = Some(HeaderAction::Back);
            }
            ui.heading(self.model.title);
            ui.separator();
            ui.label(self.model.role_name);
        });
        ui.horizontal(|ui| {
            ComboBox::from_label("Session")
                .selected_text(self.model.selected_role_label())
                .show_ui(ui, |ui| {
                    for option in &self.model.roles {
                        if ui.selectable_label(option.selected, option.label).clicked() {
                            action = Some(HeaderAction::SwitchRole(option.role));
                        }
                    }
                });
            ui.weak(&self.model.path);
        });
        ui.add_space(2.0);
        action
    }
}
