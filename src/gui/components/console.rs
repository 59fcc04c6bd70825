// src/gui/components/console.rs

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("运行日志").strong());
        if ui.small_button("复制").on_hover_text("Copy transcript").clicked() {
            ui.ctx().copy_text(app.state.transcript.render());
        }
    });
    ui.separator();

    // Always pinned to the newest line.
    egui::ScrollArea::vertical()
        .id_salt("console_transcript")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in app.state.transcript.lines() {
                ui.label(RichText::new(line.to_string()).monospace());
            }
        });
}
