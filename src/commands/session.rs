// src/commands/session.rs
use crate::{
    api::{self, AuthStatus, LoginResponse},
    config::state::{PanelState, StatusLabel},
    core::filter_options,
};

use super::Request;

pub const LOGIN_START: &str = "正在启动登录窗口...请在弹出的浏览器中扫码。";
pub const AUTH_SAVED: &str = "检测到已保存的登录状态 (auth.json)。";
pub const AUTH_MISSING: &str = "未检测到登录状态，请先点击'切换京东账号'进行扫码。";

pub(super) fn init(state: &mut PanelState, current_year: i32) -> Option<Request> {
    state.filter_options = filter_options(current_year);
    if !state.filter_options.contains(&state.filter) {
        state.filter = state.filter_options[0];
    }
    logf!("Init: {} filter options, year={current_year}", state.filter_options.len());
    Some(Request::CheckAuth)
}

pub(super) fn apply_auth(state: &mut PanelState, res: api::Result<AuthStatus>) {
    match res {
        Ok(auth) => {
            state.authenticated = auth.authenticated;
            if auth.authenticated {
                state.transcript.push(AUTH_SAVED);
                state.status = StatusLabel::LoggedIn;
            } else {
                state.transcript.push(AUTH_MISSING);
            }
        }
        // Load-time check; failures go to the developer log only.
        Err(e) => loge!("Check-auth failed: {e}"),
    }
}

pub(super) fn begin_login(state: &mut PanelState) -> Option<Request> {
    if state.busy {
        logd!("Login ignored: busy");
        return None;
    }
    state.busy = true;
    state.transcript.push(LOGIN_START);
    Some(Request::Login)
}

pub(super) fn apply_login(state: &mut PanelState, res: api::Result<LoginResponse>) {
    state.busy = false;
    match res {
        Ok(r) => state.transcript.push(format!("API响应: {}", r.message)),
        Err(e) => {
            loge!("Login failed: {e}");
            state.transcript.push(format!("请求失败: {e}"));
        }
    }
}
