use eframe::egui::{RichText, Ui};

use crate::{
    app::App,
    models::Trade,
    session::JournalKind,
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::{DirectionColor, badge, label_subdued, rr_color, section_heading},
    },
    utils::now_timestamp_ms,
};

impl App {
    /// Automatic tab: the current rolled suggestion as a card.
    /// Sub-1R rolls stay hidden; there is nothing worth acting on.
    pub(crate) fn render_automatic_tab(&mut self, ui: &mut Ui) {
        section_heading(ui, format!("🤖 {}", UI_TEXT.auto_heading).as_str());

        let Some(session) = &self.session else {
            return;
        };
        let suggestion = session.suggestion;

        if suggestion.is_actionable() {
            UI_CONFIG.card_frame().show(ui, |ui| {
                badge(ui, &suggestion.direction.to_string(), suggestion.direction.color());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    label_subdued(ui, format!("{} →", UI_TEXT.rr_label));
                    ui.label(
                        RichText::new(format!("{:.2}", suggestion.risk_reward))
                            .strong()
                            .color(rr_color(&suggestion)),
                    );
                });
            });
        } else {
            label_subdued(ui, UI_TEXT.no_suggestion);
        }

        ui.add_space(8.0);
        let mut accept_clicked = false;
        ui.horizontal(|ui| {
            if ui.button(UI_TEXT.reroll_button).clicked() {
                self.reroll_suggestion();
            }
            if suggestion.is_actionable() && ui.button(UI_TEXT.accept_button).clicked() {
                accept_clicked = true;
            }
        });

        if accept_clicked {
            self.accept_suggestion();
        }
    }

    /// Feed the automated journal through the session's append seam.
    fn accept_suggestion(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };
        let suggestion = session.suggestion;
        let price = session.current_bar().close;
        let trade = Trade::new(
            now_timestamp_ms(),
            self.symbol.clone(),
            suggestion.direction,
            price,
            1.0,
            format!("suggested {:.2}R", suggestion.risk_reward),
        );
        session.append_trade(JournalKind::Automated, trade);
    }
}
