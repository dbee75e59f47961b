//! Fetching sheet CSV exports and turning them into [`RawRow`]s.
//!
//! Sources publish their inventory as CSV over HTTP. A fetch can fail in
//! the usual ways (network, non-2xx, empty body) and those surface as
//! typed [`SheetError`]s; [`load_collection`] downgrades them to a warning
//! so a broken source renders as an empty shelf rather than a crash.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use cardshelf_core::AppConfig;
use cardshelf_engine::RawRow;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    #[error("failed to read csv file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// HTTP client for published sheet CSV exports.
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Creates a `SheetClient` with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, SheetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("cardshelf/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one CSV export and parses it into rows.
    ///
    /// The first CSV record supplies the column names; every following
    /// record becomes one [`RawRow`]. Records whose cells are all blank
    /// are skipped.
    ///
    /// # Errors
    ///
    /// - [`SheetError::Http`] on a network or TLS failure.
    /// - [`SheetError::UnexpectedStatus`] on any non-2xx response.
    /// - [`SheetError::EmptyBody`] when the response carries no content.
    pub async fn fetch_rows(&self, url: &str) -> Result<Vec<RawRow>, SheetError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(SheetError::EmptyBody {
                url: url.to_owned(),
            });
        }
        Ok(parse_csv(&body))
    }
}

/// Reads a local CSV export instead of fetching one.
///
/// # Errors
///
/// Returns [`SheetError::FileIo`] when the file cannot be read.
pub async fn read_rows(path: &str) -> Result<Vec<RawRow>, SheetError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SheetError::FileIo {
            path: path.to_owned(),
            source,
        })?;
    Ok(parse_csv(&text))
}

/// Fetches every configured source and concatenates the rows.
///
/// A source value with an `http(s)` scheme is fetched; anything else is
/// treated as a local CSV path. A source that is unset is skipped
/// silently. A source that fails is logged at warn level and contributes
/// no rows, so the caller always gets a collection to render.
pub async fn load_collection(client: &SheetClient, config: &AppConfig) -> Vec<RawRow> {
    let sources = [
        ("cards", config.cards_sheet_url.as_deref()),
        ("slabs", config.slabs_sheet_url.as_deref()),
    ];

    let mut rows = Vec::new();
    for (source, location) in sources {
        let Some(location) = location else { continue };
        let result = if location.starts_with("http://") || location.starts_with("https://") {
            client.fetch_rows(location).await
        } else {
            read_rows(location).await
        };
        match result {
            Ok(mut fetched) => {
                tracing::info!(source, rows = fetched.len(), "loaded sheet");
                rows.append(&mut fetched);
            }
            Err(err) => {
                tracing::warn!(source, error = %err, "sheet load failed, rendering source as empty");
            }
        }
    }
    rows
}

/// Parses CSV text into rows keyed by the header record.
///
/// Handles quoted fields, embedded commas and newlines, and doubled-quote
/// escapes. Header matching is forgiving because [`RawRow::insert`]
/// normalizes column names.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut records = split_records(text).into_iter();
    let Some(headers) = records.next() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    for record in records {
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = RawRow::new();
        for (header, cell) in headers.iter().zip(&record) {
            if header.trim().is_empty() {
                continue;
            }
            row.insert(header, Value::String(cell.clone()));
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    rows
}

/// Splits CSV text into records of fields, honoring quoting.
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(ch),
        }
    }

    // A final record without a trailing newline.
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}
