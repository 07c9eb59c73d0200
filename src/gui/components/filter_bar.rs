// src/gui/components/filter_bar.rs
//
// Category buttons + view toggle + Copy, with the live counter and status
// on the right. The active category button is drawn selected; "All" is the
// wildcard.

use eframe::egui::{self, Align, Layout, RichText};
use strum::IntoEnumIterator;

use crate::catalog::Category;
use crate::config::state::ViewMode;
use crate::csv;
use crate::filter::CATEGORY_ALL;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let all_active = app.controller.state().is_wildcard();
        if ui.selectable_label(all_active, "All").clicked() && !all_active {
            app.filter_by_category(CATEGORY_ALL);
        }
        for cat in Category::iter() {
            let active = app.controller.state().category == cat.tag();
            if ui.selectable_label(active, cat.to_string()).clicked() && !active {
                app.filter_by_category(cat.tag());
            }
        }

        ui.separator();

        ui.selectable_value(&mut app.state.gui.view, ViewMode::Grid, "Grid");
        ui.selectable_value(&mut app.state.gui.view, ViewMode::Table, "Table");

        ui.separator();

        if ui.button("Copy").clicked() {
            copy_visible(app, ui.ctx());
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let count = app.controller.pass().visible_count();
            let text = format!("{} product(s)", count);
            if app.counter_pulse.is_pending() {
                // Brief emphasis right after the count changes
                ui.label(RichText::new(text).strong().size(16.0));
            } else {
                ui.label(text);
            }
            ui.separator();
            ui.label(&app.status);
        });
    });
}

/// Put the visible set on the clipboard as CSV (title,price).
fn copy_visible(app: &mut App, ctx: &egui::Context) {
    let rows: Vec<Vec<String>> = app
        .controller
        .visible()
        .iter()
        .map(|p| vec![p.title.clone(), p.price.clone()])
        .collect();

    if rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = csv::to_export_string(&None, &rows, false, ',');
    logf!("Copy: {} row(s)", rows.len());
    ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
