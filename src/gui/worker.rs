// src/gui/worker.rs
//
// Background thread owning a Tokio runtime and the ApiClient. Requests are
// awaited strictly one after another, so the panel never has two backend
// calls in flight.
use std::{sync::mpsc as std_mpsc, thread};

use eframe::egui;
use tokio::sync::mpsc;

use crate::{
    api::ApiClient,
    commands::{self, Outcome, Request},
};

pub struct WorkerHandle {
    requests: mpsc::UnboundedSender<Request>,
    outcomes: std_mpsc::Receiver<Outcome>,
}

impl WorkerHandle {
    /// Queue a request. Returns false if the worker is gone.
    pub fn send(&self, req: Request) -> bool {
        self.requests.send(req).is_ok()
    }

    /// Next finished outcome, if any (never blocks the UI thread).
    pub fn try_recv(&self) -> Option<Outcome> {
        self.outcomes.try_recv().ok()
    }
}

pub fn spawn(client: ApiClient, ctx: egui::Context) -> std::io::Result<WorkerHandle> {
    let (req_tx, mut req_rx) = mpsc::unbounded_channel::<Request>();
    let (out_tx, out_rx) = std_mpsc::channel::<Outcome>();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name(s!("panel-worker"))
        .spawn(move || {
            rt.block_on(async move {
                while let Some(req) = req_rx.recv().await {
                    logd!("Worker: {req:?}");
                    let outcome = commands::perform(&client, req).await;
                    if out_tx.send(outcome).is_err() {
                        break; // GUI closed
                    }
                    ctx.request_repaint();
                }
            });
            logd!("Worker: stopped");
        })?;

    Ok(WorkerHandle { requests: req_tx, outcomes: out_rx })
}
