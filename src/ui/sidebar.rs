use eframe::egui::{ComboBox, Context, SidePanel, TextEdit};
use strum::IntoEnumIterator;

use crate::{
    app::App,
    domain::DayType,
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::{badge, label_subdued, section_heading},
    },
    utils::local_now_string,
};

impl App {
    /// The "Market Context" side panel: symbol, clock, day-type override.
    pub(crate) fn render_sidebar(&mut self, ctx: &Context) {
        SidePanel::left("market_context")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(220.0)
            .show(ctx, |ui| {
                section_heading(ui, UI_TEXT.sidebar_heading);

                ui.label(UI_TEXT.symbol_label);
                // Free-form on purpose; the symbol is a display label, not a lookup key.
                ui.add(TextEdit::singleline(&mut self.symbol).desired_width(f32::INFINITY));
                ui.add_space(4.0);
                label_subdued(ui, "Examples:");
                for example in UI_TEXT.symbol_examples {
                    label_subdued(ui, format!("• {}", example));
                }

                ui.add_space(12.0);
                section_heading(ui, format!("⏱ {}", UI_TEXT.clock_heading).as_str());
                ui.monospace(local_now_string());

                ui.add_space(12.0);
                section_heading(ui, format!("📊 {}", UI_TEXT.day_type_heading).as_str());
                ComboBox::from_id_salt(UI_TEXT.day_type_label)
                    .selected_text(self.day_type.to_string())
                    .show_ui(ui, |ui| {
                        for variant in DayType::iter() {
                            ui.selectable_value(&mut self.day_type, variant, variant.to_string());
                        }
                    });

                ui.add_space(6.0);
                if let Some(color) = self.day_type.badge_color() {
                    badge(ui, &self.day_type.to_string(), color);
                }
            });
    }
}
