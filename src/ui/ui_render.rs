use eframe::egui::{RichText, Ui};
use strum::IntoEnumIterator;

use crate::{
    app::{ActiveTab, App},
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::label_subdued,
    },
};

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut Ui) {
        ui.heading(
            RichText::new(format!("📈 {}", self.symbol))
                .color(UI_CONFIG.colors.heading)
                .size(24.0),
        );
        label_subdued(ui, UI_TEXT.app_caption);
        ui.add_space(8.0);
    }

    pub(crate) fn render_tab_strip(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for tab in ActiveTab::iter() {
                let selected = self.active_tab == tab;
                if ui.selectable_label(selected, tab.to_string()).clicked() {
                    self.active_tab = tab;
                }
            }
        });
        ui.separator();
    }
}
