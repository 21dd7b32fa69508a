use crate::view_models::TabBarViewModel;
use eframe::egui::{RichText, Ui};

pub(crate) struct TabBarView<'a> {
    model: &'a TabBarViewModel,
}

impl<'a> TabBarView<'a> {
    pub(crate) fn new(model: &'a TabBarViewModel) -> Self {
        Self { model }
    }

    /// Returns the id of the pressed tab
    pub fn show(&self, ui: &mut Ui) -> Option<&'static str> {
        let mut pressed = None;
        if self.model.tabs.is_empty() {
            return pressed;
        }

        ui.columns(self.model.tabs.len(), |columns| {
            for (ui, tab) in columns.iter_mut().zip(&self.model.tabs) {
                ui.vertical_centered(|ui| {
                    let text = RichText::new(format!("{}\n{}", tab.icon, tab.label));
                    if ui.selectable_label(tab.selected, text).clicked() {
                        pressed = Some(tab.value);
                    }
                });
            }
        });
        pressed
    }
}
