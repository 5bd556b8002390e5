// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// xurl takes no flags of its own (clap still gives us --help and --version).
// Everything after the program name is an input token: a path to a local
// HTML file or a web page URL.
//
//     xurl https://arstechnica.com/ ./sample.html https://www.medium.com/
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "xurl",
    version,
    about = "Count the live external links on web pages and local HTML files",
    long_about = "xurl scans each given web page or local HTML file for href=\"...\" links \
                  that point to a different domain, probes every one of them with an HTTP GET, \
                  and prints how many answered 200 OK."
)]
pub struct Cli {
    /// Web page URLs or paths to local HTML files, scanned in order
    ///
    /// A token whose parent directory exists on disk is read as a file
    /// (e.g. ./sample.html); everything else is fetched as a URL.
    ///
    /// Not marked required: an empty list is reported by main with its own
    /// message and exit code.
    #[arg(value_name = "URL_OR_FILE")]
    pub tokens: Vec<String>,
}
