use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints, VLine};

use crate::{
    app::App,
    ui::{UI_CONFIG, UI_TEXT, styles::section_heading},
};

impl App {
    /// Combined tab: the whole close series at once, with the replay cursor
    /// marked so manual stepping stays oriented.
    pub(crate) fn render_combined_tab(&mut self, ui: &mut Ui) {
        section_heading(ui, format!("🧠 {}", UI_TEXT.combined_heading).as_str());

        let Some(session) = &self.session else {
            return;
        };

        let closes: Vec<[f64; 2]> = session
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| [i as f64, bar.close])
            .collect();
        let cursor_x = session.cursor().index() as f64;

        Plot::new("overview_plot")
            .height(320.0)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Close", PlotPoints::new(closes))
                        .color(UI_CONFIG.colors.initiative),
                );
                plot_ui.vline(
                    VLine::new("Cursor", cursor_x).color(UI_CONFIG.colors.subdued),
                );
            });
    }
}
