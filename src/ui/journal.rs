use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::{
    app::App,
    session::{JournalKind, ReplaySession},
    ui::{
        UI_CONFIG, UI_TEXT,
        styles::{DirectionColor, label_subdued, section_heading},
    },
    utils::{epoch_ms_to_datetime_string, format_price},
};

/// What the operator clicked inside one journal block this frame.
/// Collected during rendering, applied to the session afterwards.
enum JournalAction {
    RequestDelete(JournalKind, usize),
    Confirm,
    Cancel,
}

impl App {
    pub(crate) fn render_journals(&mut self, ui: &mut Ui) {
        section_heading(ui, format!("📒 {}", UI_TEXT.journals_heading).as_str());

        let Some(session) = &mut self.session else {
            return;
        };

        let mut action = None;
        for kind in JournalKind::iter() {
            render_journal_block(ui, session, kind, &mut action);
            ui.add_space(12.0);
        }

        match action {
            Some(JournalAction::RequestDelete(kind, index)) => {
                session.request_delete(kind, index);
            }
            Some(JournalAction::Confirm) => session.confirm_delete(),
            Some(JournalAction::Cancel) => session.cancel_delete(),
            None => {}
        }
    }
}

fn render_journal_block(
    ui: &mut Ui,
    session: &ReplaySession,
    kind: JournalKind,
    action: &mut Option<JournalAction>,
) {
    let journal = session.journal(kind);

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(kind.to_string())
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        if !journal.is_empty() && ui.small_button(UI_TEXT.copy_json_button).clicked() {
            match serde_json::to_string_pretty(journal.trades()) {
                Ok(json) => ui.ctx().copy_text(json),
                Err(err) => log::error!("journal export failed: {}", err),
            }
        }
    });

    if journal.is_empty() {
        label_subdued(ui, UI_TEXT.journal_empty);
        return;
    }

    ui.push_id(kind, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0)) // time
            .column(Column::auto().at_least(70.0)) // symbol
            .column(Column::auto().at_least(50.0)) // direction
            .column(Column::auto().at_least(60.0)) // price
            .column(Column::auto().at_least(40.0)) // qty
            .column(Column::remainder()) // note
            .column(Column::auto()) // delete
            .header(20.0, |mut header| {
                for title in ["Time", "Symbol", "Dir", "Price", "Qty", "Note", ""] {
                    header.col(|ui| {
                        ui.label(RichText::new(title).strong());
                    });
                }
            })
            .body(|mut body| {
                for (i, trade) in journal.trades().iter().enumerate() {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(epoch_ms_to_datetime_string(trade.recorded_ms));
                        });
                        row.col(|ui| {
                            ui.label(&trade.symbol);
                        });
                        row.col(|ui| {
                            ui.label(
                                RichText::new(trade.direction.to_string())
                                    .color(trade.direction.color()),
                            );
                        });
                        row.col(|ui| {
                            ui.monospace(format_price(trade.price));
                        });
                        row.col(|ui| {
                            ui.monospace(format!("{:.0}", trade.quantity));
                        });
                        row.col(|ui| {
                            label_subdued(ui, trade.note.clone());
                        });
                        row.col(|ui| {
                            if ui.small_button(UI_TEXT.delete_button).clicked() {
                                *action = Some(JournalAction::RequestDelete(kind, i));
                            }
                        });
                    });
                }
            });
    });

    // Confirm strip lives under the journal that owns the pending request.
    if let Some(pending) = session.pending_delete() {
        if pending.journal == kind {
            ui.add_space(4.0);
            UI_CONFIG.warning_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "⚠ {} (row {})",
                            UI_TEXT.confirm_question,
                            pending.index + 1
                        ))
                        .color(UI_CONFIG.colors.warning),
                    );
                    if ui.button(UI_TEXT.confirm_button).clicked() {
                        *action = Some(JournalAction::Confirm);
                    }
                    if ui.button(UI_TEXT.cancel_button).clicked() {
                        *action = Some(JournalAction::Cancel);
                    }
                });
            });
        }
    }
}
