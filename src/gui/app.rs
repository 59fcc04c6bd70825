// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    api::ApiClient,
    commands::{self, Intent},
    config::{
        options::PanelOptions,
        state::{ActiveView, PanelState},
    },
    view::PanelView,
};

use super::{components, fonts, worker::{self, WorkerHandle}};

pub fn run(options: eframe::NativeOptions, panel: PanelOptions) -> Result<(), Box<dyn Error>> {
    // Fail before opening a window if the URL is unusable.
    let client = ApiClient::new(&panel)?;
    crate::log::session_start("gui", panel.base_url());
    logf!("Init: timeout={:?}", panel.timeout);

    eframe::run_native(
        "JDTools 控制台",
        options,
        Box::new(move |cc| {
            fonts::install_cjk_fallback(&cc.egui_ctx);
            let worker = worker::spawn(client, cc.egui_ctx.clone())?;
            Ok(Box::new(App::new(worker)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: PanelState,

    worker: WorkerHandle,
}

impl App {
    pub fn new(worker: WorkerHandle) -> Self {
        let mut app = Self { state: PanelState::new(), worker };
        // Page load: rebuild filter options, check the saved login.
        app.dispatch(Intent::init());
        app
    }

    /// Feed an intent through `begin` and hand any request to the worker.
    pub fn dispatch(&mut self, intent: Intent) {
        if let Some(req) = commands::begin(&mut self.state, intent) {
            if !self.worker.send(req) {
                loge!("Worker: channel closed, request dropped");
            }
        }
    }

    #[inline]
    pub fn view(&self) -> PanelView {
        PanelView::project(&self.state)
    }

    #[inline]
    pub fn active_view(&self) -> ActiveView {
        self.state.active_view
    }

    /// Drain finished requests into state; follow-ups go straight back out.
    fn process_outcomes(&mut self) {
        while let Some(outcome) = self.worker.try_recv() {
            if let Some(next) = commands::apply(&mut self.state, outcome) {
                if !self.worker.send(next) {
                    loge!("Worker: channel closed, follow-up dropped");
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_outcomes();
        let view = self.view();
        let blocked = view.alert.is_some();

        egui::SidePanel::left("nav")
            .resizable(false)
            .show(ctx, |ui| {
                if blocked { ui.disable(); }
                components::nav::draw(ui, self);
            });

        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            if blocked { ui.disable(); }
            components::action_buttons::draw(ui, self, &view);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if blocked { ui.disable(); }
            // Mutually exclusive; only the active view is drawn.
            if view.console_visible {
                components::console::draw(ui, self);
            } else if view.data_visible {
                components::data_view::draw(ui, self, &view);
            }
        });

        components::alert::draw(ctx, self, &view);
    }
}
