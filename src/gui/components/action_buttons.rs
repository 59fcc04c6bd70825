// src/gui/components/action_buttons.rs

use eframe::egui::{self, RichText, widgets::Spinner};
use crate::{
    commands::Intent,
    gui::app::App,
    view::PanelView,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, view: &PanelView) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        // Login
        if ui
            .add_enabled(view.controls_enabled, egui::Button::new("切换京东账号"))
            .on_hover_text("Open the login browser on the backend")
            .clicked()
        {
            app.dispatch(Intent::Login);
        }

        ui.separator();

        // Filter range
        ui.label("范围:");
        let selected = view
            .filters
            .iter()
            .find(|o| o.selected)
            .map(|o| o.label.clone())
            .unwrap_or_default();
        let mut choice = app.state.filter;
        ui.add_enabled_ui(view.controls_enabled, |ui| {
            egui::ComboBox::from_id_salt("filter_range")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for opt in &view.filters {
                        ui.selectable_value(&mut choice, opt.range, opt.label.as_str());
                    }
                });
        });
        if choice != app.state.filter {
            app.dispatch(Intent::SelectFilter(choice));
        }

        // Scrape
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scrape = ui.add_enabled(
            view.controls_enabled,
            egui::Button::new(
                RichText::new("开始采集")
                .color(black)
                .strong())
            .fill(red));

        if button_scrape.clicked() {
            app.dispatch(Intent::Scrape);
        }

        if !view.controls_enabled {
            ui.add(Spinner::new().size(16.0));
        }
    });

    ui.horizontal(|ui| {
        ui.label("状态:");
        ui.label(RichText::new(view.status).strong());
        ui.separator();
        ui.label("订单数:");
        ui.label(RichText::new(&view.order_count).strong());
        ui.separator();
        ui.label("商品数:");
        ui.label(RichText::new(&view.item_count).strong());
    });
    ui.add_space(4.0);
}
