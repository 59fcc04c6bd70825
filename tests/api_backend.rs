// tests/api_backend.rs
//
// ApiClient + command loop against an in-process axum stand-in for the
// scraping backend.
use std::{collections::HashMap, time::Duration};

use axum::{
    Json, Router,
    extract::Query,
    routing::{get, post},
};
use serde_json::{Value, json};

use jd_panel::api::{ApiClient, ApiError};
use jd_panel::commands::{self, AUTH_SAVED, Intent};
use jd_panel::config::options::PanelOptions;
use jd_panel::config::state::{ActiveView, PanelState};
use jd_panel::core::FilterRange;
use jd_panel::view::PanelView;

const FILE_BYTES: &[u8] = b"PK\x03\x04 fake xlsx";

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn backend(with_file: bool) -> Router {
    Router::new()
        .route("/api/login", post(|| async {
            Json(json!({"status": "started", "message": "Opening browser for login..."}))
        }))
        .route("/api/check-auth", get(|| async { Json(json!({"authenticated": true})) }))
        .route("/api/scrape", post(|Query(q): Query<HashMap<String, String>>| async move {
            match q.get("filter_type").map(String::as_str) {
                Some("2019") => Json(json!({"status": "empty", "message": "No orders found"})),
                _ => Json(json!({"status": "success", "count": 5, "order_count": 2, "file": "/srv/downloads/o.xlsx"})),
            }
        }))
        .route("/api/latest-file", get(move || async move {
            if with_file {
                Json(json!({
                    "name": "o.xlsx",
                    "path": "/downloads/o.xlsx",
                    "full_path": "/srv/downloads/o.xlsx",
                    "modified": "2024-05-01 10:00:00",
                    "size": 2048
                }))
            } else {
                Json(json!({}))
            }
        }))
        .route("/api/open-folder", post(|| async {
            Json(json!({"status": "error", "message": "no permission"}))
        }))
        .route("/downloads/o.xlsx", get(|| async { FILE_BYTES }))
}

fn client(base: &str) -> ApiClient {
    ApiClient::new(&PanelOptions::default().with_base_url(base)).unwrap()
}

#[tokio::test]
async fn endpoints_decode() {
    let base = serve(backend(true)).await;
    let c = client(&base);

    assert!(c.check_auth().await.unwrap().authenticated);
    assert_eq!(c.login().await.unwrap().message, "Opening browser for login...");

    let r = c.scrape(&FilterRange::ThisYear).await.unwrap();
    assert!(r.is_success());
    assert_eq!((r.count, r.order_count), (5, Some(2)));

    let f = c.latest_file().await.unwrap();
    assert!(f.exists());
    assert_eq!(f.size, Some(2048));

    let o = c.open_folder().await.unwrap();
    assert!(!o.is_success());

    assert_eq!(c.download("/downloads/o.xlsx").await.unwrap(), FILE_BYTES);
}

#[tokio::test]
async fn filter_type_is_sent_as_query() {
    let base = serve(backend(true)).await;
    let r = client(&base).scrape(&FilterRange::Year(2019)).await.unwrap();
    assert_eq!(r.status, "empty");
    assert_eq!(r.message.as_deref(), Some("No orders found"));
}

#[tokio::test]
async fn missing_route_is_a_status_error() {
    let base = serve(Router::new()).await;
    match client(&base).check_auth().await {
        Err(ApiError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_request_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let c = client(&format!("http://{addr}"));
    let mut state = PanelState::new();
    commands::run(&c, &mut state, Intent::Init { current_year: 2026 }).await;
    commands::run(&c, &mut state, Intent::Scrape).await;

    assert_eq!(PanelView::project(&state).status, "错误");
    assert!(state.transcript.lines().last().unwrap().text.starts_with("采集请求错误: "));
}

#[test]
fn rejects_non_http_url() {
    let opts = PanelOptions::default().with_base_url("ftp://example.com");
    assert!(matches!(ApiClient::new(&opts), Err(ApiError::InvalidUrl(_))));
}

#[tokio::test]
async fn full_session_through_command_loop() {
    let base = serve(backend(true)).await;
    let dir = tempfile::tempdir().unwrap();
    let opts = PanelOptions::default()
        .with_base_url(&base)
        .with_download_dir(dir.path());
    let c = ApiClient::new(&opts).unwrap();
    let mut state = PanelState::new();

    commands::run(&c, &mut state, Intent::Init { current_year: 2026 }).await;
    assert!(state.transcript.contains(AUTH_SAVED));
    assert_eq!(PanelView::project(&state).status, "已登录");

    commands::run(&c, &mut state, Intent::Scrape).await;
    assert!(state.transcript.contains("采集完成! 共找到 2 个订单 (5 商品)。"));
    assert_eq!(PanelView::project(&state).order_count, "2");

    commands::run(&c, &mut state, Intent::SwitchView(ActiveView::Data)).await;
    let v = PanelView::project(&state);
    assert_eq!(v.meta.size, "2.0 KB");
    assert!(v.download.enabled);

    commands::run(&c, &mut state, Intent::Download).await;
    let saved = dir.path().join("o.xlsx");
    assert_eq!(std::fs::read(&saved).unwrap(), FILE_BYTES);
    assert!(state.transcript.lines().last().unwrap().text.starts_with("已下载: "));
    assert_eq!(state.downloaded.as_deref(), Some(saved.as_path()));

    // Second download does not clobber the first.
    commands::run(&c, &mut state, Intent::Download).await;
    assert!(dir.path().join("o (2).xlsx").exists());
    assert_eq!(std::fs::read(&saved).unwrap(), FILE_BYTES);
    assert!(PanelView::project(&state).open_file_enabled);

    commands::run(&c, &mut state, Intent::OpenFolder).await;
    assert_eq!(state.alert.as_deref(), Some("打开目录失败: no permission"));
}

#[tokio::test]
async fn data_view_refresh_follows_scrape() {
    let base = serve(backend(true)).await;
    let c = client(&base);
    let mut state = PanelState::new();
    commands::run(&c, &mut state, Intent::Init { current_year: 2026 }).await;

    state.active_view = ActiveView::Data;
    assert!(state.latest_file.is_none());
    commands::run(&c, &mut state, Intent::Scrape).await;
    assert!(state.has_file(), "follow-up fetch ran after the scrape");
}

#[tokio::test]
async fn no_file_leaves_download_disabled() {
    let base = serve(backend(false)).await;
    let c = client(&base);
    let mut state = PanelState::new();
    commands::run(&c, &mut state, Intent::SwitchView(ActiveView::Data)).await;

    let v = PanelView::project(&state);
    assert!(!v.download.enabled);
    assert_eq!(v.meta.name, "-");
}

#[tokio::test]
async fn optional_timeout_surfaces_as_error() {
    let app = Router::new().route("/api/scrape", post(|| async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Json(Value::Null)
    }));
    let base = serve(app).await;
    let opts = PanelOptions::default()
        .with_base_url(&base)
        .with_timeout(Some(Duration::from_millis(200)));
    let c = ApiClient::new(&opts).unwrap();

    let mut state = PanelState::new();
    commands::run(&c, &mut state, Intent::Init { current_year: 2026 }).await;
    commands::run(&c, &mut state, Intent::Scrape).await;
    assert_eq!(PanelView::project(&state).status, "错误");
}
