use {
    crate::{
        models::{SuggestionQuality, TradeDirection, TradeSuggestion},
        ui::UI_CONFIG,
    },
    eframe::egui::{Color32, CornerRadius, FontId, RichText, Sense, Stroke, Ui, vec2},
};

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TradeDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Long => UI_CONFIG.colors.long,
            Self::Short => UI_CONFIG.colors.short,
        }
    }
}

pub fn rr_color(suggestion: &TradeSuggestion) -> Color32 {
    match suggestion.quality() {
        SuggestionQuality::Good => UI_CONFIG.colors.rr_good,
        SuggestionQuality::Poor => UI_CONFIG.colors.rr_bad,
    }
}

pub(crate) fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(6.0);
    ui.heading(RichText::new(text).color(UI_CONFIG.colors.heading));
    ui.add_space(4.0);
}

pub(crate) fn label_subdued(ui: &mut Ui, text: impl Into<String>) {
    ui.label(RichText::new(text.into()).color(UI_CONFIG.colors.subdued));
}

/// Small rounded pill with a solid background, the CSS-badge equivalent.
pub(crate) fn badge(ui: &mut Ui, text: &str, fill: Color32) {
    let font_id = FontId::proportional(12.0);
    let galley = ui.painter().layout_no_wrap(
        text.to_string(),
        font_id.clone(),
        Color32::WHITE,
    );
    let padding = vec2(10.0, 4.0);
    let (rect, _) = ui.allocate_exact_size(galley.size() + padding * 2.0, Sense::hover());
    ui.painter().rect(
        rect,
        CornerRadius::same(u8::MAX), // fully pilled
        fill,
        Stroke::NONE,
        eframe::egui::StrokeKind::Inside,
    );
    ui.painter().galley(rect.min + padding, galley, Color32::WHITE);
}
