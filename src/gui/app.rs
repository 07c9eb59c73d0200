// src/gui/app.rs
use std::{error::Error, path::Path, time::Instant};

use eframe::egui;

use crate::{
    config::{
        consts::{APP_NAME, DEFAULT_CATALOG_FILE, PULSE_DELAY},
        state::AppState,
    },
    defer::Deferred,
    filter::FilterController,
    store,
};

use super::{components, fx::CardFx};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // the catalog + filter pair live here
    pub controller: FilterController,

    // per-card show/hide effect state, index-aligned with the catalog
    pub card_fx: Vec<CardFx>,

    // deferred presentation timing
    pub suggest_close: Deferred,
    pub counter_pulse: Deferred,

    pub last_count: usize,
    pub scroll_top_pending: bool,
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let products = store::load_or_builtin(Path::new(DEFAULT_CATALOG_FILE));
        let controller = FilterController::new(products);
        let n = controller.products().len();

        logf!("Init: {} product(s), filter=\"{}\"", n, controller.state().category);

        Self {
            state,
            card_fx: vec![CardFx::shown(); n],
            controller,
            suggest_close: Deferred::default(),
            counter_pulse: Deferred::default(),
            last_count: n,
            scroll_top_pending: false,
            status: format!("Loaded {} product(s)", n),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /* ---------- programmatic surface ---------- */

    /// Back to defaults: wildcard category, empty search, "All" selected.
    pub fn reset_filters(&mut self) {
        let now = Instant::now();
        self.state.gui.search_text.clear();
        self.close_suggestions();
        self.controller.reset();
        self.scroll_top_pending = true;
        self.after_pass(now);
        logf!("UI: Filters reset");
    }

    pub fn filter_by_category(&mut self, tag: &str) {
        let now = Instant::now();
        self.controller.set_category(tag);
        self.scroll_top_pending = true;
        self.after_pass(now);
        logf!("UI: Category → \"{}\"", tag);
    }

    pub fn search(&mut self, term: &str) {
        let now = Instant::now();
        self.state.gui.search_text = s!(term);
        self.controller.set_term(term);
        self.close_suggestions();
        self.after_pass(now);
        logf!("UI: Search → \"{}\"", self.controller.state().term);
    }

    /* ---------- search-bar plumbing ---------- */

    /// Live filtering while typing; the dropdown follows the text.
    pub fn on_search_input(&mut self, now: Instant) {
        let text = self.state.gui.search_text.clone();
        self.controller.set_term(&text);
        if text.trim().is_empty() {
            self.close_suggestions();
        } else {
            self.state.gui.suggestions_open = true;
            self.suggest_close.cancel();
        }
        self.after_pass(now);
    }

    /// Enter or the search button: apply the term, drop the dropdown.
    pub fn submit_search(&mut self, now: Instant) {
        let text = self.state.gui.search_text.clone();
        self.controller.set_term(&text);
        self.close_suggestions();
        self.after_pass(now);
    }

    pub fn clear_search(&mut self, now: Instant) {
        self.state.gui.search_text.clear();
        self.controller.clear();
        self.close_suggestions();
        self.after_pass(now);
    }

    pub fn choose_suggestion(&mut self, term: &str, now: Instant) {
        self.state.gui.search_text = s!(term);
        self.submit_search(now);
    }

    pub fn close_suggestions(&mut self) {
        self.state.gui.suggestions_open = false;
        self.suggest_close.cancel();
    }

    /* ---------- match-pass fallout ---------- */

    /// Push the fresh pass into the card effects and pulse the counter if
    /// the visible count moved.
    fn after_pass(&mut self, now: Instant) {
        let pass = self.controller.pass();
        for (ix, fx) in self.card_fx.iter_mut().enumerate() {
            fx.set_target(pass.is_visible(ix), now);
        }

        let count = pass.visible_count();
        if count != self.last_count {
            self.counter_pulse.schedule_in(now, PULSE_DELAY);
            self.last_count = count;
        }
    }

    /// Advance all deferred deadlines once per frame.
    pub fn tick_timers(&mut self, now: Instant) {
        let _ = self.counter_pulse.fire(now);
        if self.suggest_close.fire(now) {
            self.state.gui.suggestions_open = false;
        }
        for fx in &mut self.card_fx {
            fx.tick(now);
        }
    }

    /// Anything still counting down? Then keep frames coming.
    pub fn any_timing_pending(&self) -> bool {
        self.suggest_close.is_pending()
            || self.counter_pulse.is_pending()
            || self.card_fx.iter().any(|fx| fx.is_fading())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick_timers(now);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            components::search_bar::draw(ui, self);
            ui.add_space(4.0);
            components::filter_bar::draw(ui, self);
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::product_grid::draw(ui, self);
        });

        if self.any_timing_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(30));
        }
    }
}
