//! Pipeline driver - wires a whole run together
//!
//! A run is strictly sequential except for enrichment:
//! 1. Parse the root URL
//! 2. Fetch the root page (failure here is fatal and nothing is written)
//! 3. Extract outbound links from it
//! 4. Enrich every link concurrently
//! 5. Write the Markdown link list

use crate::config::Config;
use crate::crawler::enricher::Enricher;
use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::{fetch_document, HttpFetcher, PageFetcher};
use crate::link::Link;
use crate::output::write_markdown;
use crate::progress::{LinkStatus, NoopSink, ProgressSink};
use crate::url::{extract_domain, parse_root_url};
use crate::{HarvestError, UrlError};
use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    /// The root URL as parsed
    pub root_url: String,
    /// Number of links written
    pub link_count: usize,
    /// Number of links whose page could not be fetched
    pub failed_count: usize,
    /// Where the Markdown file was written
    pub output_path: PathBuf,
}

/// Runs the fetch → extract → enrich → write sequence
pub struct Pipeline {
    config: Arc<Config>,
    fetcher: Arc<dyn PageFetcher>,
    sink: Arc<dyn ProgressSink>,
}

impl Pipeline {
    /// Creates a pipeline that fetches over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Pipeline)` - Ready to run
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::from_config(&config.fetch)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Creates a pipeline around any [`PageFetcher`]
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
            sink: Arc::new(NoopSink),
        }
    }

    /// Sends progress events to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Path the Markdown file is written to
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.config.output.path)
    }

    /// Fetches the root page and returns its enriched outbound links
    ///
    /// Nothing is written to disk.
    pub async fn collect(&self, root_url: &str) -> Result<Vec<Link>, HarvestError> {
        let root = parse_root_url(root_url)?;
        let enriched = self.collect_with_status(&root).await?;
        Ok(enriched.into_iter().map(|(link, _)| link).collect())
    }

    async fn collect_with_status(
        &self,
        root: &Url,
    ) -> Result<Vec<(Link, LinkStatus)>, HarvestError> {
        let root_host = extract_domain(root).ok_or(UrlError::MissingDomain)?;

        tracing::info!("Processing {}", root);

        // The document is not Send; keep it out of scope across the enrichment await.
        let links = {
            let document = fetch_document(self.fetcher.as_ref(), root.as_str())
                .await
                .map_err(|source| HarvestError::RootFetch {
                    url: root.to_string(),
                    source,
                })?;
            extract_links(&document, &root_host, self.config.links.dedupe)
        };

        self.sink.root_fetched(root.as_str(), links.len());

        let enricher = Enricher::new(Arc::clone(&self.fetcher))
            .with_sink(Arc::clone(&self.sink))
            .with_concurrency_limit(self.config.fetch.max_concurrent_fetches);

        Ok(enricher.enrich_with_status(links).await)
    }

    /// Runs the whole pipeline and writes the output file
    ///
    /// # Returns
    ///
    /// * `Ok(HarvestReport)` - The link list was written
    /// * `Err(HarvestError)` - The root URL was invalid, the root page could
    ///   not be fetched (no file is written), or the file could not be written
    pub async fn run(&self, root_url: &str) -> Result<HarvestReport, HarvestError> {
        let root = parse_root_url(root_url)?;
        let enriched = self.collect_with_status(&root).await?;
        let failed_count = enriched
            .iter()
            .filter(|(_, status)| *status == LinkStatus::Failed)
            .count();
        let links: Vec<Link> = enriched.into_iter().map(|(link, _)| link).collect();

        let output_path = self.output_path();
        write_markdown(&links, &output_path)?;
        self.sink.output_written(&output_path, links.len());

        Ok(HarvestReport {
            root_url: root.to_string(),
            link_count: links.len(),
            failed_count,
            output_path,
        })
    }
}
