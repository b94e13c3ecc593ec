use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, ScrollArea, Visuals},
    },
    rand::rngs::StdRng,
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

use crate::{
    Cli,
    app::ActiveTab,
    config::{DEMO, DF},
    data::{generate_bars, random_suggestion, session_rng},
    domain::DayType,
    session::ReplaySession,
    ui::UI_CONFIG,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Operator preferences, persisted across sessions.
    pub(crate) symbol: String,
    pub(crate) day_type: DayType,
    pub(crate) active_tab: ActiveTab,

    // Session state, rebuilt from scratch every run.
    #[serde(skip)]
    pub(crate) session: Option<ReplaySession>,
    #[serde(skip)]
    pub(crate) rng: Option<StdRng>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            symbol: DEMO.default_symbol.to_string(),
            day_type: DayType::default(),
            active_tab: ActiveTab::default(),
            session: None,
            rng: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };
        if DF.log_persistence {
            log::info!("restored prefs: symbol={} tab={}", app.symbol, app.active_tab);
        }

        if let Some(symbol) = args.symbol {
            app.symbol = symbol;
        }

        // The feed and the first suggestion are rolled exactly once here.
        // Replay data must not churn underneath the user on every click.
        let mut rng = session_rng(args.seed);
        let bars = generate_bars(&mut rng, args.bars);
        let suggestion = random_suggestion(&mut rng);

        match ReplaySession::new(bars, suggestion) {
            Ok(session) => app.session = Some(session),
            Err(err) => log::error!("failed to build replay session: {}", err),
        }
        app.rng = Some(rng);

        app
    }

    /// Roll a fresh suggestion on explicit request only.
    pub(crate) fn reroll_suggestion(&mut self) {
        let (Some(rng), Some(session)) = (&mut self.rng, &mut self.session) else {
            return;
        };
        session.suggestion = random_suggestion(rng);
        if DF.log_suggestions {
            log::info!(
                "suggestion rerolled: {} {:.2}R",
                session.suggestion.direction,
                session.suggestion.risk_reward
            );
        }
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                self.render_header(ui);
                self.render_tab_strip(ui);
                ui.add_space(8.0);
                match self.active_tab {
                    ActiveTab::Automatic => self.render_automatic_tab(ui),
                    ActiveTab::Manual => self.render_manual_tab(ui),
                    ActiveTab::Combined => self.render_combined_tab(ui),
                }
                ui.add_space(16.0);
                self.render_journals(ui);
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.render_sidebar(ctx);
        self.render_central_panel(ctx);

        // Keep the sidebar clock moving.
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_persistence {
            log::info!("saving prefs: symbol={} tab={}", self.symbol, self.active_tab);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.background;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
