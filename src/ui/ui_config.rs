use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

/// UI Colors for consistent theming. The palette is a dark GitHub-ish scheme:
/// near-black panels, muted card borders, green/red for long/short.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub subdued: Color32,

    pub long: Color32,
    pub short: Color32,
    pub rr_good: Color32,
    pub rr_bad: Color32,

    pub initiative: Color32,
    pub rotational: Color32,

    pub warning: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(14, 17, 23),
        card: Color32::from_rgb(22, 27, 34),
        card_border: Color32::from_rgb(48, 54, 61),
        heading: Color32::WHITE,
        label: Color32::from_rgb(201, 209, 217),
        subdued: Color32::from_rgb(139, 148, 158),

        long: Color32::from_rgb(46, 160, 67),
        short: Color32::from_rgb(218, 54, 51),
        rr_good: Color32::from_rgb(46, 160, 67),
        rr_bad: Color32::from_rgb(218, 54, 51),

        initiative: Color32::from_rgb(31, 111, 235),
        rotational: Color32::from_rgb(139, 148, 158),

        warning: Color32::from_rgb(210, 153, 34),
    },
};

impl UiConfig {
    /// Frame for the sidebar (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Rounded bordered "card", the dashboard's basic building block.
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(10),
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Card variant for the pending-deletion warning strip.
    pub fn warning_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.warning),
            corner_radius: CornerRadius::same(6),
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }
}
