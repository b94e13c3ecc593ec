use eframe::egui::{RichText, Ui};

use crate::{
    app::App,
    domain::BarType,
    models::TradeDirection,
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::{DirectionColor, label_subdued, section_heading},
    },
    utils::{epoch_ms_to_datetime_string, format_price, now_timestamp_ms},
};

impl App {
    /// Manual tab: the current bar as a card plus the replay controls.
    pub(crate) fn render_manual_tab(&mut self, ui: &mut Ui) {
        section_heading(ui, format!("🎮 {}", UI_TEXT.manual_heading).as_str());

        let Some(session) = &mut self.session else {
            return;
        };

        let bar = *session.current_bar();
        let body_color = match bar.get_type() {
            BarType::Bullish => UI_CONFIG.colors.long,
            BarType::Bearish => UI_CONFIG.colors.short,
        };

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.label(
                RichText::new(epoch_ms_to_datetime_string(bar.timestamp_ms))
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
            ui.horizontal(|ui| {
                for (tag, value) in [
                    ("O", bar.open),
                    ("H", bar.high),
                    ("L", bar.low),
                    ("C", bar.close),
                ] {
                    label_subdued(ui, format!("{}:", tag));
                    ui.label(RichText::new(format_price(value)).monospace().color(body_color));
                }
            });
            label_subdued(
                ui,
                format!(
                    "Bar {} of {}",
                    session.cursor().index() + 1,
                    session.cursor().series_len()
                ),
            );
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(UI_TEXT.prev_button).clicked() {
                session.retreat();
            }
            if ui.button(UI_TEXT.next_button).clicked() {
                session.advance();
            }
            if ui.button(UI_TEXT.reset_button).clicked() {
                session.reset();
            }
        });

        ui.add_space(8.0);
        let symbol = self.symbol.clone();
        ui.horizontal(|ui| {
            match session.position() {
                Some(pos) => {
                    ui.label(
                        RichText::new(format!(
                            "{} from {} (bar {})",
                            pos.direction,
                            format_price(pos.entry_price),
                            pos.entry_index + 1
                        ))
                        .color(pos.direction.color()),
                    );
                    if ui.button(UI_TEXT.close_position_button).clicked() {
                        session.close_position(now_timestamp_ms(), &symbol);
                    }
                }
                None => {
                    if ui.button(UI_TEXT.mark_long_button).clicked() {
                        session.mark_position(TradeDirection::Long);
                    }
                    if ui.button(UI_TEXT.mark_short_button).clicked() {
                        session.mark_position(TradeDirection::Short);
                    }
                }
            }
        });
    }
}
