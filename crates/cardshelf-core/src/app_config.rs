use std::path::PathBuf;

/// Ambient application configuration, read from environment variables.
///
/// Engine behavior (priority categories, alias table, page sizes) lives in
/// the YAML [`crate::CatalogConfig`]; this struct covers the surrounding
/// process concerns: where the sheets live, logging, and the staleness
/// window after which a caller should reload.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CSV export URL for the cards sheet. An unset source contributes no
    /// rows.
    pub cards_sheet_url: Option<String>,
    /// CSV export URL for the slabs sheet.
    pub slabs_sheet_url: Option<String>,
    /// Path to the catalog YAML file.
    pub catalog_path: PathBuf,
    pub log_level: String,
    /// Timeout for the single best-effort sheet fetch.
    pub fetch_timeout_secs: u64,
    /// Seconds after which a loaded collection counts as stale.
    pub cache_ttl_secs: u64,
}
