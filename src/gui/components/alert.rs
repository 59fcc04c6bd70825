// src/gui/components/alert.rs
//
// Blocking alert: while it is open the rest of the panel ignores input.

use eframe::egui;
use crate::{commands::Intent, gui::app::App, view::PanelView};

pub fn draw(ctx: &egui::Context, app: &mut App, view: &PanelView) {
    let Some(msg) = view.alert.as_deref() else { return };

    let mut dismissed = false;
    egui::Window::new("提示")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(msg);
            ui.add_space(6.0);
            if ui.button("确定").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.dispatch(Intent::DismissAlert);
    }
}
