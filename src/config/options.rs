// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Where the backend lives and how we talk to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelOptions {
    base_url: String,
    /// `None` waits indefinitely; scrapes routinely run for minutes.
    pub timeout: Option<Duration>,
    pub download_dir: PathBuf,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            timeout: None,
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
        }
    }
}

impl PanelOptions {
    /// Defaults, then environment overrides. Flags are applied on top by the frontends.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                opts.set_base_url(&url);
            }
        }
        if let Ok(dir) = std::env::var(ENV_DOWNLOAD_DIR) {
            if !dir.trim().is_empty() {
                opts.download_dir = PathBuf::from(dir.trim());
            }
        }
        opts
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stored without a trailing slash so endpoint paths can be appended as-is.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim().trim_end_matches('/').to_string();
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.set_base_url(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Peel the global flags (`--url`, `--timeout`, `--download-dir`) off an
    /// argument list, on top of `from_env()`. Everything else is returned in order.
    pub fn from_args<I>(args: I) -> Result<(Self, Vec<String>), Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::from_env();
        let mut rest = Vec::new();
        let mut args = args.into_iter();
        while let Some(a) = args.next() {
            match a.as_str() {
                "--url" => {
                    let v = args.next().ok_or("Missing value for --url")?;
                    opts.set_base_url(&v);
                }
                "--timeout" => {
                    let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                    opts.timeout = (v > 0).then(|| Duration::from_secs(v));
                }
                "--download-dir" => {
                    opts.download_dir = PathBuf::from(args.next().ok_or("Missing value for --download-dir")?);
                }
                _ => rest.push(a),
            }
        }
        Ok((opts, rest))
    }

    /// Absolute URL for an endpoint or a backend-relative file path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            join!(&self.base_url, path)
        } else {
            join!(&self.base_url, "/", path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let o = PanelOptions::default().with_base_url("http://localhost:9000/");
        assert_eq!(o.base_url(), "http://localhost:9000");
        assert_eq!(o.url_for("/api/login"), "http://localhost:9000/api/login");
        assert_eq!(o.url_for("downloads/a.xlsx"), "http://localhost:9000/downloads/a.xlsx");
    }

    #[test]
    fn flags_are_peeled_off() {
        let args = ["--url", "http://h:1/", "scrape", "--timeout", "30", "--filter", "2"]
            .map(String::from);
        let (o, rest) = PanelOptions::from_args(args).unwrap();
        assert_eq!(o.base_url(), "http://h:1");
        assert_eq!(o.timeout, Some(Duration::from_secs(30)));
        assert_eq!(rest, vec!["scrape", "--filter", "2"]);
    }

    #[test]
    fn zero_timeout_means_none() {
        let args = ["--timeout", "0"].map(String::from);
        let (o, _) = PanelOptions::from_args(args).unwrap();
        assert_eq!(o.timeout, None);
    }

    #[test]
    fn default_has_no_timeout() {
        assert_eq!(PanelOptions::default().timeout, None);
    }
}
