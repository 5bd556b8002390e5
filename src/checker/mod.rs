// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - domain: Works out the registrable domain of a URL
// - html: Extracts external links from HTML text
// - http: Makes HTTP requests to check if links are alive
// - progress: Pluggable progress display for the link probes
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod domain;
mod html;
mod http;
mod progress;

// Re-export public items from submodules
// This lets users write `checker::count_live()` instead of
// `checker::http::count_live()`
pub use domain::registrable_domain;
pub use html::extract_external_links;
pub use http::count_live;
pub use progress::{NoProgress, ProgressBar, ProgressObserver};
