// src/gui/components/data_view.rs
//
// Latest export summary + file actions. Purely a view over PanelView.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::{commands::Intent, gui::app::App, view::PanelView};

pub fn draw(ui: &mut egui::Ui, app: &mut App, view: &PanelView) {
    ui.label(RichText::new("最新导出文件").strong());
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(90.0))
        .column(Column::remainder().clip(true))
        .body(|mut body| {
            for (key, value) in view.meta.rows() {
                body.row(22.0, |mut row| {
                    row.col(|ui| { ui.label(key); });
                    row.col(|ui| { ui.label(RichText::new(value).monospace()); });
                });
            }
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let mut download_clicked = false;
        ui.scope(|ui| {
            ui.multiply_opacity(view.download.opacity());
            let resp = ui.add_enabled(view.download.enabled, egui::Button::new("下载最新文件"));
            let resp = match &view.download.href {
                Some(href) => resp.on_hover_text(href.as_str()),
                None => resp,
            };
            download_clicked = resp.clicked();
        });
        if download_clicked {
            app.dispatch(Intent::Download);
        }

        let open_file = ui
            .add_enabled(view.open_file_enabled, egui::Button::new("打开最新文件"))
            .on_hover_text("Open the downloaded copy with the default app");
        if open_file.clicked() {
            app.dispatch(Intent::OpenFile);
        }

        if ui.button("📁 打开下载目录").on_hover_text("Open the backend's download folder").clicked() {
            app.dispatch(Intent::OpenFolder);
        }
    });
}
