// src/gui/components/product_grid.rs
//
// The listing itself. Cards fade in/out; a fading card keeps its slot until
// the removal deadline fires. The table view renders the same visible set
// through egui_extras.

use std::time::Instant;

use eframe::egui::{self, Id, RichText, Vec2};
use egui_extras::{Column, TableBuilder};

use crate::catalog::Product;
use crate::config::consts::{CARD_H, CARD_W, FADE_SECS};
use crate::config::state::ViewMode;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let now = Instant::now();
    let ctx = ui.ctx().clone();

    // "No products" panel, fading with the zero-result condition
    let target = if app.controller.pass().is_empty() { 1.0 } else { 0.0 };
    let opacity = ctx.animate_value_with_time(Id::new("no_products_fade"), target, FADE_SECS);
    if opacity > 0.01 {
        ui.scope(|ui| {
            ui.set_opacity(opacity);
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("No products found").heading());
                ui.label("Try a different term, or clear the search.");
                if ui.button("Clear search").clicked() {
                    app.clear_search(now);
                }
                ui.add_space(8.0);
            });
        });
    }

    let mut scroll = egui::ScrollArea::vertical().id_salt("products_scroll");
    if app.scroll_top_pending {
        scroll = scroll.vertical_scroll_offset(0.0);
        app.scroll_top_pending = false;
    }
    scroll.show(ui, |ui| {
        let w = ui.available_width();
        ui.set_min_width(w);
        match app.state.gui.view {
            ViewMode::Grid => grid(ui, app, &ctx),
            ViewMode::Table => table(ui, app),
        }
    });
}

fn grid(ui: &mut egui::Ui, app: &App, ctx: &egui::Context) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = Vec2::new(10.0, 10.0);

        for ix in 0..app.controller.products().len() {
            let fx = app.card_fx[ix];
            if !fx.in_layout() {
                continue;
            }
            let opacity =
                ctx.animate_value_with_time(Id::new(("product_card", ix)), fx.target_opacity(), FADE_SECS);
            if let Some(product) = app.controller.product(ix) {
                card(ui, product, opacity);
            }
        }
    });
}

fn card(ui: &mut egui::Ui, product: &Product, opacity: f32) {
    ui.allocate_ui(Vec2::new(CARD_W, CARD_H), |ui| {
        ui.set_opacity(opacity);
        // Sink the card slightly while it fades out
        ui.add_space((1.0 - opacity) * 12.0);

        egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(8)).show(ui, |ui| {
            ui.set_width(CARD_W - 18.0);
            ui.label(RichText::new(&product.title).strong());
            ui.label(RichText::new(&product.price).color(egui::Color32::from_rgb(0xF0, 0xD2, 0x3C)));
            ui.horizontal_wrapped(|ui| {
                for tag in &product.categories {
                    ui.small(tag);
                }
            });
        });
    });
}

fn table(ui: &mut egui::Ui, app: &App) {
    let row_ix = &app.controller.pass().row_ix;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true).at_least(160.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| { ui.label(RichText::new("Title").strong()); });
            header.col(|ui| { ui.label(RichText::new("Price").strong()); });
            header.col(|ui| { ui.label(RichText::new("Categories").strong()); });
        })
        .body(|mut body| {
            body.rows(18.0, row_ix.len(), |mut row| {
                let i = row.index();
                if let Some(p) = row_ix.get(i).and_then(|&ix| app.controller.product(ix)) {
                    row.col(|ui| { ui.label(&p.title); });
                    row.col(|ui| { ui.label(&p.price); });
                    row.col(|ui| { ui.label(p.categories.join(", ")); });
                }
            });
        });
}
