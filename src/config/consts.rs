// src/config/consts.rs

// Backend
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const ENV_BASE_URL: &str = "JD_PANEL_URL";

// Endpoints
pub const EP_LOGIN: &str = "/api/login";
pub const EP_SCRAPE: &str = "/api/scrape";
pub const EP_CHECK_AUTH: &str = "/api/check-auth";
pub const EP_LATEST_FILE: &str = "/api/latest-file";
pub const EP_OPEN_FOLDER: &str = "/api/open-folder";

// Filter ranges
pub const FLOOR_YEAR: i32 = 2015;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/panel.log";
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";
pub const ENV_DOWNLOAD_DIR: &str = "JD_PANEL_DOWNLOAD_DIR";

// Display
pub const PLACEHOLDER: &str = "-";
pub const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
