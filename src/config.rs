// src/config.rs
// =============================================================================
// Runtime settings for a scan.
//
// xurl has no config file and reads no environment variables that change
// its behaviour, so the "configuration layer" is a plain struct with
// defaults. Tests build their own ScanConfig with shorter timeouts.
// =============================================================================

use crate::error::{Result, ScanError};
use reqwest::Client;
use std::time::Duration;

/// Per-request timeout applied to page fetches and liveness probes
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Redirect hops followed before a request is treated as failed
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Number of cells in the progress bar
pub const DEFAULT_PROGRESS_WIDTH: usize = 100;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub request_timeout: Duration,
    pub max_redirects: usize,
    pub progress_width: usize,
    /// Draw the per-item progress bar on stdout
    pub show_progress: bool,
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            progress_width: DEFAULT_PROGRESS_WIDTH,
            show_progress: true,
            user_agent: concat!("xurl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ScanConfig {
    /// Builds the single HTTP client shared by every fetch and probe in a run
    ///
    /// Reusing one client gives us connection pooling across links that
    /// live on the same host.
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects))
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(ScanError::Client)
    }
}
