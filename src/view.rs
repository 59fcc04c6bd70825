// src/view.rs
//
// Pure projection of PanelState into display values. The GUI draws from
// this and tests assert on it; neither needs a window.
use crate::{
    config::{
        consts::PLACEHOLDER,
        state::{ActiveView, PanelState},
    },
    core::{FilterRange, format_size},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub range: FilterRange,
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Latest export summary card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaFields {
    pub name: String,
    pub modified: String,
    pub size: String,
    pub path: String,
}

impl MetaFields {
    fn empty() -> Self {
        Self {
            name: s!(PLACEHOLDER),
            modified: s!(PLACEHOLDER),
            size: s!(PLACEHOLDER),
            path: s!(PLACEHOLDER),
        }
    }

    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("文件名", self.name.as_str()),
            ("生成时间", self.modified.as_str()),
            ("文件大小", self.size.as_str()),
            ("文件路径", self.path.as_str()),
        ]
    }
}

/// Download control: dimmed and inert unless a file exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadControl {
    pub enabled: bool,
    pub href: Option<String>,
}

impl DownloadControl {
    pub fn opacity(&self) -> f32 {
        if self.enabled { 1.0 } else { 0.5 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub status: &'static str,
    pub order_count: String,
    /// Items in the last successful scrape.
    pub item_count: String,
    pub active_view: ActiveView,
    pub console_visible: bool,
    pub data_visible: bool,
    pub filters: Vec<FilterOption>,
    pub meta: MetaFields,
    pub download: DownloadControl,
    /// A local download exists and nothing is in flight.
    pub open_file_enabled: bool,
    /// Login/scrape controls are interactive.
    pub controls_enabled: bool,
    pub alert: Option<String>,
}

impl PanelView {
    pub fn project(state: &PanelState) -> Self {
        let filters = state
            .filter_options
            .iter()
            .map(|r| FilterOption {
                range: *r,
                value: r.value(),
                label: r.label(),
                selected: *r == state.filter,
            })
            .collect();

        let (meta, download) = match state.latest_file.as_ref().filter(|f| f.exists()) {
            Some(f) => (
                MetaFields {
                    name: or_dash!(f.name.as_deref()),
                    modified: or_dash!(f.modified.as_deref()),
                    size: format_size(f.size),
                    path: or_dash!(f.display_path()),
                },
                DownloadControl { enabled: f.href().is_some(), href: f.href().map(String::from) },
            ),
            None => (MetaFields::empty(), DownloadControl { enabled: false, href: None }),
        };

        Self {
            status: state.status.text(),
            order_count: or_dash!(state.order_count.map(|n| n.to_string())),
            item_count: or_dash!(
                state.scrape_result.as_ref().filter(|r| r.is_success()).map(|r| r.count.to_string())
            ),
            active_view: state.active_view,
            console_visible: state.active_view == ActiveView::Console,
            data_visible: state.active_view == ActiveView::Data,
            filters,
            meta,
            download,
            open_file_enabled: state.downloaded.is_some() && !state.busy,
            controls_enabled: !state.busy,
            alert: state.alert.clone(),
        }
    }
}
