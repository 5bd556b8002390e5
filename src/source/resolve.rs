// src/source/resolve.rs
// =============================================================================
// This module turns one command-line token into HTML text plus the Domain
// that owns it.
//
// A token is either:
// - a local file ("./sample.html")  -> owner is the file stem ("sample")
// - a URL ("https://www.medium.com/") -> owner is the registrable domain
//   ("medium.com"), and the HTML is the body of a GET request
//
// How we decide: if the token's directory part exists on disk, it's a file.
// The directory part is everything before the last separator, with trailing
// separators trimmed ("pages/" -> "pages", "./" -> ".", "/" -> "/").
// A bare "sample.html" (no directory part) is treated as a URL, and so is
// "https://host/page" since "https://host" is not a path on disk.
// =============================================================================

use crate::checker::registrable_domain;
use crate::error::{Result, ScanError};
use reqwest::Client;
use std::path::Path;
use tracing::debug;

// Where the HTML came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Url,
}

// A successfully resolved input
#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub kind: SourceKind,
    pub html: String,
    pub domain: String,
}

// Classifies a token without touching the network
pub fn classify(token: &str) -> SourceKind {
    let dir = dir_part(token);

    if !dir.is_empty() && Path::new(dir).exists() {
        SourceKind::File
    } else {
        SourceKind::Url
    }
}

// Text before the last path separator, minus trailing separators
//
// Unlike Path::parent, a trailing separator is not a component boundary
// here: "pages/" has directory part "pages", and "/" stays "/".
fn dir_part(token: &str) -> &str {
    match token.rfind(std::path::is_separator) {
        Some(idx) => {
            let head = &token[..=idx];
            let trimmed = head.trim_end_matches(std::path::is_separator);
            if trimmed.is_empty() {
                head
            } else {
                trimmed
            }
        }
        None => "",
    }
}

// Owner domain of a file input: base name without its extension
//
// Example: "./pages/sample.html" -> "sample"
pub fn file_domain(token: &str) -> String {
    Path::new(token)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// Resolves a token to (html, domain)
//
// Errors:
//   FileRead      - the file token could not be read as text
//   Fetch         - the URL token could not be fetched
//   EmptyDocument - we got text, but it was empty
pub async fn resolve(client: &Client, token: &str) -> Result<ResolvedSource> {
    let kind = classify(token);
    debug!(token = token, kind = ?kind, "resolving input");

    let (html, domain) = match kind {
        SourceKind::File => (read_file(token).await?, file_domain(token)),
        SourceKind::Url => (fetch_page(client, token).await?, registrable_domain(token)),
    };

    if html.is_empty() {
        return Err(ScanError::EmptyDocument {
            token: token.to_string(),
        });
    }

    Ok(ResolvedSource { kind, html, domain })
}

async fn read_file(token: &str) -> Result<String> {
    tokio::fs::read_to_string(token)
        .await
        .map_err(|source| ScanError::FileRead {
            token: token.to_string(),
            source,
        })
}

// Fetches a web page and returns its body as text
//
// The status code is not checked: an error page with a body is still HTML
// we can scan. Only transport errors (and undecodable bodies) fail.
async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let to_fetch_error = |source| ScanError::Fetch {
        token: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(to_fetch_error)?;
    debug!(url = url, status = response.status().as_u16(), "fetched page");

    response.text().await.map_err(to_fetch_error)
}
