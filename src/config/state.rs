// src/config/state.rs
use std::path::PathBuf;

use crate::{
    api::{LatestFile, ScrapeResult},
    core::{FilterRange, Transcript},
};

/// Which of the two mutually exclusive views is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    #[default]
    Console,
    Data,
}

impl ActiveView {
    pub const ALL: [ActiveView; 2] = [ActiveView::Console, ActiveView::Data];

    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Console => "控制台",
            ActiveView::Data => "数据概览",
        }
    }
}

/// The status label in the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusLabel {
    #[default]
    Idle,
    LoggedIn,
    Running,
    Complete,
    Failed,
    Error,
}

impl StatusLabel {
    pub fn text(&self) -> &'static str {
        match self {
            StatusLabel::Idle => "就绪",
            StatusLabel::LoggedIn => "已登录",
            StatusLabel::Running => "运行中...",
            StatusLabel::Complete => "完成",
            StatusLabel::Failed => "失败",
            StatusLabel::Error => "错误",
        }
    }
}

/// Single source of truth for the panel. Owned by the UI thread and only
/// mutated through `commands::begin` / `commands::apply`.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    /// Mirrors `/api/check-auth`; never persisted.
    pub authenticated: bool,

    /// Last `/api/latest-file` payload; `None` until the data view was opened.
    pub latest_file: Option<LatestFile>,

    /// Last scrape payload; the item count card reads from it.
    pub scrape_result: Option<ScrapeResult>,

    pub active_view: ActiveView,
    pub status: StatusLabel,

    /// Order-count card. `None` renders as the placeholder.
    pub order_count: Option<u64>,

    /// Regenerated on every init so the year list follows the calendar.
    pub filter_options: Vec<FilterRange>,
    pub filter: FilterRange,

    pub transcript: Transcript,

    /// Where the last download landed locally.
    pub downloaded: Option<PathBuf>,

    /// A login or scrape is in flight.
    pub busy: bool,

    /// Pending blocking alert; cleared when the user dismisses it.
    pub alert: Option<String>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending alert, if any.
    pub fn dismiss_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn has_file(&self) -> bool {
        self.latest_file.as_ref().is_some_and(LatestFile::exists)
    }
}
