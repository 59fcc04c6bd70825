// src/commands/mod.rs
//
// Folder module facade. A user intent goes through three steps:
//   begin   (pure)  intent  → state changes + at most one Request
//   perform (async) Request → Outcome, at most one backend call
//   apply   (pure)  Outcome → state changes (+ optional follow-up Request)
// Frontends own the loop; nothing here touches a UI.

mod files;
mod scrape;
mod session;

use std::{io, path::PathBuf};

use crate::{
    api::{self, ApiClient, AuthStatus, FolderResponse, LatestFile, LoginResponse, ScrapeResult},
    config::state::{ActiveView, PanelState},
    core::{FilterRange, filter},
    file,
};

pub use files::{OPEN_FILE_FAILED, OPEN_FOLDER_FAILED, REQUEST_ERROR};
pub use scrape::SCRAPE_DONE;
pub use session::{AUTH_MISSING, AUTH_SAVED, LOGIN_START};

/// What the user (or page load) asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Panel start-up. Carries the year so `begin` stays clock-free.
    Init { current_year: i32 },
    Login,
    Scrape,
    SelectFilter(FilterRange),
    SwitchView(ActiveView),
    OpenFolder,
    Download,
    /// Open the locally saved download with the OS default app.
    OpenFile,
    DismissAlert,
}

impl Intent {
    pub fn init() -> Self {
        Intent::Init { current_year: filter::current_year() }
    }
}

/// One backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    CheckAuth,
    Login,
    Scrape(FilterRange),
    LatestFile,
    OpenFolder,
    Download { path: String, name: String },
    /// Local only; no backend call.
    OpenFile(PathBuf),
}

/// Typed result of a `Request`.
#[derive(Debug)]
pub enum Outcome {
    CheckAuth(api::Result<AuthStatus>),
    Login(api::Result<LoginResponse>),
    Scrape(api::Result<ScrapeResult>),
    LatestFile(api::Result<LatestFile>),
    OpenFolder(api::Result<FolderResponse>),
    Download(api::Result<PathBuf>),
    OpenFile(io::Result<()>),
}

pub fn begin(state: &mut PanelState, intent: Intent) -> Option<Request> {
    logd!("Intent: {intent:?}");
    match intent {
        Intent::Init { current_year } => session::init(state, current_year),
        Intent::Login => session::begin_login(state),
        Intent::Scrape => scrape::begin(state),
        Intent::SelectFilter(f) => {
            scrape::select_filter(state, f);
            None
        }
        Intent::SwitchView(v) => files::switch_view(state, v),
        Intent::OpenFolder => Some(Request::OpenFolder),
        Intent::Download => files::begin_download(state),
        Intent::OpenFile => files::begin_open_file(state),
        Intent::DismissAlert => {
            state.dismiss_alert();
            None
        }
    }
}

pub async fn perform(client: &ApiClient, req: Request) -> Outcome {
    match req {
        Request::CheckAuth => Outcome::CheckAuth(client.check_auth().await),
        Request::Login => Outcome::Login(client.login().await),
        Request::Scrape(f) => Outcome::Scrape(client.scrape(&f).await),
        Request::LatestFile => Outcome::LatestFile(client.latest_file().await),
        Request::OpenFolder => Outcome::OpenFolder(client.open_folder().await),
        Request::Download { path, name } => {
            Outcome::Download(files::download(client, &path, &name).await)
        }
        Request::OpenFile(path) => Outcome::OpenFile(file::open_with_default_app(&path)),
    }
}

pub fn apply(state: &mut PanelState, outcome: Outcome) -> Option<Request> {
    match outcome {
        Outcome::CheckAuth(r) => {
            session::apply_auth(state, r);
            None
        }
        Outcome::Login(r) => {
            session::apply_login(state, r);
            None
        }
        Outcome::Scrape(r) => scrape::apply(state, r),
        Outcome::LatestFile(r) => {
            files::apply_latest(state, r);
            None
        }
        Outcome::OpenFolder(r) => {
            files::apply_open_folder(state, r);
            None
        }
        Outcome::Download(r) => {
            files::apply_download(state, r);
            None
        }
        Outcome::OpenFile(r) => {
            files::apply_open_file(state, r);
            None
        }
    }
}

/// Drive one intent to completion, follow-ups included, awaiting each call
/// in turn. Used by the CLI; the GUI runs the same steps across its worker.
pub async fn run(client: &ApiClient, state: &mut PanelState, intent: Intent) {
    let mut next = begin(state, intent);
    while let Some(req) = next {
        let outcome = perform(client, req).await;
        next = apply(state, outcome);
    }
}
