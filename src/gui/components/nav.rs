// src/gui/components/nav.rs
//
// Left navigation. Selecting an entry switches the view; picking the data
// view always re-fetches the latest file summary, even if already shown.

use eframe::egui;
use crate::{
    commands::Intent,
    config::state::ActiveView,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(8.0);
    ui.heading("JDTools");
    ui.separator();

    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 6.0;

        let cur = app.active_view();
        for view in ActiveView::ALL {
            let selected = view == cur;
            if ui.selectable_label(selected, view.title()).clicked() {
                app.dispatch(Intent::SwitchView(view));
            }
        }
    });
}
