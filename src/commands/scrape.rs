// src/commands/scrape.rs
use crate::{
    api::{self, ScrapeResult},
    config::state::{ActiveView, PanelState, StatusLabel},
    core::FilterRange,
};

use super::Request;

pub const SCRAPE_DONE: &str = "采集完成!";

pub(super) fn select_filter(state: &mut PanelState, f: FilterRange) {
    if state.filter_options.contains(&f) {
        state.filter = f;
    } else {
        logd!("Filter {f} not offered, keeping {}", state.filter);
    }
}

pub(super) fn begin(state: &mut PanelState) -> Option<Request> {
    if state.busy {
        logd!("Scrape ignored: busy");
        return None;
    }
    let filter = state.filter;
    state.busy = true;
    state.status = StatusLabel::Running;
    state.transcript.push(format!(
        "开始采集 (Filter={filter})... 此过程可能需要几分钟，请保持后端运行。"
    ));
    logf!("Scrape: Begin filter={filter}");
    Some(Request::Scrape(filter))
}

/// Completion line for a successful scrape.
pub fn summary(r: &ScrapeResult) -> String {
    let counts = match r.orders() {
        Some(orders) => format!("{orders} 个订单 ({} 商品)", r.count),
        None => format!("{} 个订单", r.count),
    };
    format!("{SCRAPE_DONE} 共找到 {counts}。")
}

pub(super) fn apply(state: &mut PanelState, res: api::Result<ScrapeResult>) -> Option<Request> {
    state.busy = false;
    match res {
        Ok(r) if r.is_success() => {
            logf!("Scrape: OK count={} orders={:?}", r.count, r.order_count);
            state.transcript.push(summary(&r));
            if let Some(file) = r.file.as_deref() {
                state.transcript.push(format!("文件已保存: {file}"));
            }
            state.order_count = Some(r.display_count());
            state.status = StatusLabel::Complete;
            state.scrape_result = Some(r);
            // A new export exists; refresh the summary if it is on screen.
            (state.active_view == ActiveView::Data).then_some(Request::LatestFile)
        }
        Ok(r) => {
            logf!("Scrape: status={} message={:?}", r.status, r.message);
            state.transcript.push(format!(
                "采集结束: {}",
                r.message.as_deref().unwrap_or(r.status.as_str())
            ));
            state.status = StatusLabel::Failed;
            state.scrape_result = Some(r);
            None
        }
        Err(e) => {
            loge!("Scrape: Error {e}");
            state.transcript.push(format!("采集请求错误: {e}"));
            state.status = StatusLabel::Error;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_without_orders_counts_items_as_orders() {
        let r = ScrapeResult { status: s!("success"), count: 4, ..Default::default() };
        assert_eq!(summary(&r), "采集完成! 共找到 4 个订单。");
    }
}
