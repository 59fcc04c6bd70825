// src/commands/files.rs
//
// Data view: latest export metadata, download, and the backend's
// "open downloads folder".
use std::{io, path::PathBuf};

use crate::{
    api::{self, ApiClient, FolderResponse, LatestFile},
    config::state::{ActiveView, PanelState},
    core::sanitize::{file_name_from_path, sanitize_file_name},
    file,
};

use super::Request;

pub const OPEN_FOLDER_FAILED: &str = "打开目录失败";
pub const REQUEST_ERROR: &str = "请求错误";
pub const OPEN_FILE_FAILED: &str = "打开文件失败";

pub(super) fn switch_view(state: &mut PanelState, view: ActiveView) -> Option<Request> {
    if state.active_view != view {
        logf!("UI: View switch {:?} → {:?}", state.active_view, view);
    }
    state.active_view = view;
    // Always re-fetch; the summary is never cached.
    (view == ActiveView::Data).then_some(Request::LatestFile)
}

pub(super) fn apply_latest(state: &mut PanelState, res: api::Result<LatestFile>) {
    match res {
        Ok(f) => {
            logd!("Latest file: {:?}", f.name);
            state.latest_file = Some(f);
        }
        Err(e) => loge!("Latest file: {e}"),
    }
}

pub(super) fn begin_download(state: &PanelState) -> Option<Request> {
    let f = state.latest_file.as_ref()?;
    let Some(path) = f.href() else {
        logd!("Download ignored: no file");
        return None;
    };
    let name = f.name.as_deref().unwrap_or_else(|| file_name_from_path(path));
    Some(Request::Download { path: s!(path), name: sanitize_file_name(name) })
}

pub(super) async fn download(client: &ApiClient, path: &str, name: &str) -> api::Result<PathBuf> {
    let bytes = client.download(path).await?;
    Ok(file::save_download(&client.options().download_dir, name, &bytes)?)
}

pub(super) fn apply_download(state: &mut PanelState, res: api::Result<PathBuf>) {
    match res {
        Ok(p) => {
            logf!("Download: saved {}", p.display());
            state.transcript.push(format!("已下载: {}", p.display()));
            state.downloaded = Some(p);
        }
        Err(e) => {
            loge!("Download: {e}");
            state.transcript.push(format!("下载失败: {e}"));
        }
    }
}

pub(super) fn apply_open_folder(state: &mut PanelState, res: api::Result<FolderResponse>) {
    match res {
        Ok(r) if r.is_success() => logf!("Open folder: OK"),
        Ok(r) => {
            let msg = r.message.unwrap_or_default();
            loge!("Open folder: {msg}");
            state.alert = Some(format!("{OPEN_FOLDER_FAILED}: {msg}"));
        }
        Err(e) => {
            loge!("Open folder: {e}");
            state.alert = Some(format!("{REQUEST_ERROR}: {e}"));
        }
    }
}

pub(super) fn begin_open_file(state: &PanelState) -> Option<Request> {
    if state.busy {
        logd!("Open file ignored: busy");
        return None;
    }
    let Some(path) = state.downloaded.as_ref() else {
        logd!("Open file ignored: nothing downloaded");
        return None;
    };
    logf!("Open file: {}", path.display());
    Some(Request::OpenFile(path.clone()))
}

pub(super) fn apply_open_file(state: &mut PanelState, res: io::Result<()>) {
    if let Err(e) = res {
        loge!("Open file: {e}");
        state.alert = Some(format!("{OPEN_FILE_FAILED}: {e}"));
    }
}
