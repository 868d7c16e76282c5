//! Install script download.

use reqwest::blocking::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AuditError, Result};

/// Fetches the install script over HTTPS.
pub struct ScriptDownloader {
    client: Client,
    url: String,
    file_name: String,
    timeout: Duration,
}

impl ScriptDownloader {
    /// Create a downloader for `url`, saving under `file_name`.
    pub fn new(url: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self::with_timeout(url, file_name, Duration::from_secs(120))
    }

    /// Create a downloader with a custom timeout.
    pub fn with_timeout(
        url: impl Into<String>,
        file_name: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("dotnet-audit/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            url: url.into(),
            file_name: file_name.into(),
            timeout,
        }
    }

    /// Source URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download the script into `dir` and return its path.
    ///
    /// Any existing file with the same name is overwritten.
    pub fn download(&self, dir: &Path) -> Result<PathBuf> {
        tracing::info!("Downloading {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.error(format!("HTTP {}", status)));
        }

        let body = response.bytes().map_err(|e| self.error(e.to_string()))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &body)?;

        tracing::debug!("Saved {} bytes to {}", body.len(), path.display());
        Ok(path)
    }

    fn error(&self, message: String) -> AuditError {
        AuditError::Download {
            url: self.url.clone(),
            message,
        }
    }
}
