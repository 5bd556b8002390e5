// src/source/mod.rs
// =============================================================================
// Source resolution: getting HTML (and its owning domain) out of a
// command-line token, whether it names a local file or a web page.
// =============================================================================

mod resolve;

pub use resolve::resolve;
