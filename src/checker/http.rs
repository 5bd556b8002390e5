// src/checker/http.rs
// =============================================================================
// This module checks whether external links are alive.
//
// Key functionality:
// - Sends one HTTP GET per link (no HEAD, no retries)
// - A link is "live" only if the final status code is exactly 200
// - Network/protocol errors print a diagnostic and the loop keeps going
// - Reports progress through a ProgressObserver after every link
//
// Links are probed one after another. Each probe is awaited before the next
// one starts, so diagnostics and progress frames come out in a stable order.
//
// Rust concepts:
// - async/await: Non-blocking network I/O on the tokio runtime
// - Enums: To represent the outcome of a single probe
// - Trait objects / generics: The progress observer is pluggable
// =============================================================================

use super::progress::ProgressObserver;
use reqwest::{Client, StatusCode};
use std::collections::HashSet;
use tracing::debug;

// What happened when we probed a single link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered 200 OK
    Live,
    /// The server answered, but with some other status
    NotOk(StatusCode),
    /// The request never produced a response
    Failed(String),
}

// Totals for one batch of probes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LivenessTally {
    /// Links that answered 200
    pub live: usize,
    /// Links that were probed at all
    pub probed: usize,
    /// Links whose request errored, in the order they were probed
    pub failed: Vec<String>,
}

// Counts how many of `links` answer with HTTP 200
//
// Parameters:
//   client: shared reqwest client (timeout and redirect policy already set)
//   links: the external links of one input item
//   label: prefix for the progress display, e.g. "Progress on x.html : "
//   progress: where progress callbacks go
//
// Returns: number of live links (0 for an empty set, without any probing)
pub async fn count_live<P>(
    client: &Client,
    links: &HashSet<String>,
    label: &str,
    progress: &mut P,
) -> usize
where
    P: ProgressObserver + ?Sized,
{
    let tally = probe_links(client, links, label, progress).await;
    debug!(
        live = tally.live,
        probed = tally.probed,
        failed = tally.failed.len(),
        "liveness tally"
    );
    tally.live
}

// Same as count_live, but returns the full tally
pub async fn probe_links<P>(
    client: &Client,
    links: &HashSet<String>,
    label: &str,
    progress: &mut P,
) -> LivenessTally
where
    P: ProgressObserver + ?Sized,
{
    let mut tally = LivenessTally::default();

    if links.is_empty() {
        return tally;
    }

    let total = links.len();
    progress.start(label, total);

    for link in links {
        let outcome = probe_link(client, link).await;
        tally.probed += 1;

        match &outcome {
            ProbeOutcome::Live => tally.live += 1,
            ProbeOutcome::NotOk(status) => {
                debug!(link = %link, status = status.as_u16(), "link did not answer 200");
            }
            ProbeOutcome::Failed(reason) => {
                debug!(link = %link, reason = %reason, "link probe failed");
                println!("Invalid URL: {}", link);
                tally.failed.push(link.clone());
            }
        }

        progress.advance(tally.probed, total);
    }

    progress.finish();
    tally
}

// Sends one GET request and classifies the result
pub async fn probe_link(client: &Client, url: &str) -> ProbeOutcome {
    match client.get(url).send().await {
        Ok(response) if response.status() == StatusCode::OK => ProbeOutcome::Live,
        Ok(response) => ProbeOutcome::NotOk(response.status()),
        Err(e) => ProbeOutcome::Failed(describe_error(&e)),
    }
}

// Turns a reqwest error into a short human-readable reason
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - A link that isn't a valid URL at all ("http//oops")
fn describe_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_builder() {
        format!("invalid URL: {}", error_string)
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}
