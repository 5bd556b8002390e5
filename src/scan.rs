// src/scan.rs
// =============================================================================
// The driver: runs resolve -> classify -> count for every input token.
//
// Results are collected into an ordered Vec<ResultRow>, one row per token,
// in exactly the order the tokens were given. Nothing here aborts the run:
// a failing token gets a count of 0 and the loop moves on.
// =============================================================================

use crate::checker::{self, ProgressObserver};
use crate::source;
use reqwest::Client;
use std::fmt;
use std::io::{self, Write};
use tracing::{info, warn};

// One line of the final summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub token: String,
    pub count: usize,
}

impl fmt::Display for ResultRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.token, self.count)
    }
}

// Scans every token in order and returns one row per token
//
// `progress` is asked for a fresh observer per token, so each item gets its
// own bar (or none, in tests).
pub async fn scan_all<F, P>(client: &Client, tokens: &[String], mut progress: F) -> Vec<ResultRow>
where
    F: FnMut() -> P,
    P: ProgressObserver,
{
    let mut rows = Vec::with_capacity(tokens.len());

    for token in tokens {
        let mut observer = progress();
        let count = scan_one(client, token, &mut observer).await;
        rows.push(ResultRow {
            token: token.clone(),
            count,
        });
    }

    rows
}

// Scans a single token, returning 0 on any failure
pub async fn scan_one<P>(client: &Client, token: &str, progress: &mut P) -> usize
where
    P: ProgressObserver + ?Sized,
{
    print!("Parsing HTML of {}\r", token);
    let _ = io::stdout().flush();

    let resolved = match source::resolve(client, token).await {
        Ok(resolved) => resolved,
        Err(e) => {
            println!("{}", e);
            warn!(token = token, error = ?e, "skipping input");
            return 0;
        }
    };

    // Overwrite the "Parsing HTML of ..." line
    print!("{}\r", " ".repeat(token.len() + 16));
    let _ = io::stdout().flush();

    let external = checker::extract_external_links(&resolved.html, &resolved.domain);
    info!(
        token = token,
        kind = ?resolved.kind,
        domain = %resolved.domain,
        external = external.len(),
        "classified links"
    );

    let label = format!("Progress on {} : ", token);
    let count = checker::count_live(client, &external, &label, progress).await;
    info!(token = token, live = count, "finished input");

    count
}

// Prints the summary, one "<token> <count>" line per row
pub fn print_summary<W: Write>(out: &mut W, rows: &[ResultRow]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::NoProgress;
    use crate::config::ScanConfig;
    use std::fs;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> Client {
        ScanConfig::default().build_client().unwrap()
    }

    #[test]
    fn test_result_row_display() {
        let row = ResultRow {
            token: "./sample.html".to_string(),
            count: 3,
        };
        assert_eq!(row.to_string(), "./sample.html 3");
    }

    #[test]
    fn test_print_summary_keeps_order() {
        let rows = vec![
            ResultRow { token: "b".to_string(), count: 2 },
            ResultRow { token: "a".to_string(), count: 0 },
        ];
        let mut out = Vec::new();
        print_summary(&mut out, &rows).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "b 2\na 0\n");
    }

    #[tokio::test]
    async fn test_scan_all_counts_and_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alive"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/dead"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();

        // Two live-looking duplicates, one dead link, one internal link
        let page = dir.path().join("sample.html");
        fs::write(
            &page,
            format!(
                r#"<a href="{uri}/alive">a</a>
                   <a href="{uri}/alive">a again</a>
                   <a href="{uri}/dead">d</a>
                   <a href="http://sample.com/x">home</a>"#,
                uri = server.uri()
            ),
        )
        .unwrap();

        let plain = dir.path().join("plain.html");
        fs::write(&plain, "<p>no links</p>").unwrap();

        let missing = dir.path().join("missing.html");

        let tokens = vec![
            page.to_string_lossy().into_owned(),
            missing.to_string_lossy().into_owned(),
            plain.to_string_lossy().into_owned(),
        ];

        let rows = scan_all(&test_client(), &tokens, || NoProgress).await;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ResultRow { token: tokens[0].clone(), count: 1 });
        assert_eq!(rows[1], ResultRow { token: tokens[1].clone(), count: 0 });
        assert_eq!(rows[2], ResultRow { token: tokens[2].clone(), count: 0 });
    }

    #[tokio::test]
    async fn test_unreachable_url_counts_zero() {
        let count = scan_one(&test_client(), "http://127.0.0.1:1/", &mut NoProgress).await;
        assert_eq!(count, 0);
    }
}
