// src/api/types.rs
//
// Wire payloads. Every field the backend may omit is optional; unknown
// fields are ignored.
use serde::Deserialize;

pub const STATUS_SUCCESS: &str = "success";

/// `POST /api/login`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// `POST /api/scrape`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScrapeResult {
    pub status: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub order_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    /// Path of the export the backend wrote, when it reports one.
    #[serde(default)]
    pub file: Option<String>,
}

impl ScrapeResult {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Distinct orders when the backend reports a non-zero figure.
    pub fn orders(&self) -> Option<u64> {
        self.order_count.filter(|&n| n > 0)
    }

    /// Value for the order-count card: orders if known, else items.
    pub fn display_count(&self) -> u64 {
        self.orders().unwrap_or(self.count)
    }
}

/// `GET /api/check-auth`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AuthStatus {
    #[serde(default)]
    pub authenticated: bool,
}

/// `GET /api/latest-file`. An empty object means no export exists yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LatestFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    /// Backend-relative download path, e.g. `/downloads/x.xlsx`.
    #[serde(default)]
    pub path: Option<String>,
    /// Absolute path on the backend host.
    #[serde(default)]
    pub full_path: Option<String>,
}

impl LatestFile {
    pub fn exists(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Path to show the user: host path if known, else the download path.
    pub fn display_path(&self) -> Option<&str> {
        self.full_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(self.path.as_deref())
    }

    /// Download target, only when a file exists.
    pub fn href(&self) -> Option<&str> {
        if !self.exists() {
            return None;
        }
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}

/// `POST /api/open-folder`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FolderResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl FolderResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_latest_file_means_no_file() {
        let f: LatestFile = serde_json::from_str("{}").unwrap();
        assert!(!f.exists());
        assert_eq!(f.href(), None);
    }

    #[test]
    fn scrape_without_order_count_uses_items() {
        let r: ScrapeResult =
            serde_json::from_str(r#"{"status":"success","count":7}"#).unwrap();
        assert!(r.is_success());
        assert_eq!(r.orders(), None);
        assert_eq!(r.display_count(), 7);
    }

    #[test]
    fn zero_order_count_falls_back_to_items() {
        let r: ScrapeResult =
            serde_json::from_str(r#"{"status":"success","count":3,"order_count":0}"#).unwrap();
        assert_eq!(r.display_count(), 3);
    }

    #[test]
    fn login_ignores_extra_fields() {
        let r: LoginResponse = serde_json::from_str(
            r#"{"status":"started","message":"Opening browser for login...","extra":1}"#,
        )
        .unwrap();
        assert_eq!(r.message, "Opening browser for login...");
    }
}
