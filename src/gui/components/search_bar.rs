// src/gui/components/search_bar.rs
//
// Search input + submit/clear buttons + the suggestions dropdown.
// The dropdown closes on submit, on a delayed blur (so a suggestion click
// lands first), or on a press outside the search area.

use std::time::Instant;

use eframe::egui::{self, Key, TextEdit};

use crate::catalog::SUGGESTIONS;
use crate::config::consts::BLUR_DELAY;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let now = Instant::now();

    let mut submit = false;
    let mut clear = false;
    let mut chosen: Option<&'static str> = None;

    let input_resp = ui
        .horizontal(|ui| {
            let resp = ui.add(
                TextEdit::singleline(&mut app.state.gui.search_text)
                    .hint_text("Search products…")
                    .desired_width(280.0),
            );

            if resp.changed() {
                app.on_search_input(now);
            }
            if resp.gained_focus() && !app.state.gui.search_text.trim().is_empty() {
                app.state.gui.suggestions_open = true;
                app.suggest_close.cancel();
            }
            if resp.lost_focus() {
                if ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                } else if app.state.gui.suggestions_open {
                    // Let a suggestion click through before closing
                    app.suggest_close.schedule_in(now, BLUR_DELAY);
                }
            }

            if ui.button("Search").clicked() {
                submit = true;
            }

            // Clear affordance only while there is something to clear
            if !app.state.gui.search_text.is_empty() {
                if ui.button("✕").on_hover_text("Clear search").clicked() {
                    clear = true;
                }
            }

            resp
        })
        .inner;

    let mut dropdown_rect = None;
    if app.state.gui.suggestions_open {
        let inner = egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                ui.label("Suggestions:");
                for term in SUGGESTIONS {
                    if ui.selectable_label(false, *term).clicked() {
                        chosen = Some(*term);
                    }
                }
            });
        dropdown_rect = Some(inner.response.rect);
    }

    // Press outside the input + dropdown closes the dropdown immediately
    if app.state.gui.suggestions_open && ui.input(|i| i.pointer.any_pressed()) {
        if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
            let inside = input_resp.rect.contains(pos)
                || dropdown_rect.is_some_and(|r| r.contains(pos));
            if !inside {
                app.close_suggestions();
            }
        }
    }

    if let Some(term) = chosen {
        app.choose_suggestion(term, now);
        input_resp.request_focus();
    }
    if submit {
        app.submit_search(now);
    }
    if clear {
        app.clear_search(now);
        input_resp.request_focus();
    }
}
