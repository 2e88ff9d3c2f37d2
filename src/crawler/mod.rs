//! Crawler module for fetching and processing pages
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching behind the `PageFetcher` trait
//! - HTML parsing, text normalization, and title/description extraction
//! - Concurrent enrichment of outbound links
//! - The pipeline that ties a run together

mod document;
mod enricher;
mod extractor;
mod fetcher;
mod pipeline;
mod task_group;

pub use document::{attribute, element_text, normalize_text, Document};
pub use enricher::{enrich_link, Enricher};
pub use extractor::{extract_description, extract_links, extract_title};
pub use fetcher::{build_http_client, fetch_document, fetch_url, HttpFetcher, PageFetcher};
pub use pipeline::{HarvestReport, Pipeline};
pub use task_group::TaskGroup;

use crate::config::Config;
use crate::progress::TracingSink;
use crate::HarvestError;
use std::sync::Arc;

/// Runs a complete harvest over HTTP, reporting progress through `tracing`
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client from `config`
/// 2. Fetch the root page and collect its outbound links
/// 3. Enrich every link concurrently
/// 4. Write the Markdown link list
///
/// # Returns
///
/// * `Ok(HarvestReport)` - The link list was written
/// * `Err(HarvestError)` - The run failed before the list could be written
pub async fn harvest(config: Config, root_url: &str) -> Result<HarvestReport, HarvestError> {
    Pipeline::new(config)?
        .with_sink(Arc::new(TracingSink))
        .run(root_url)
        .await
}
