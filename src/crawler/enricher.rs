//! Concurrent link enrichment
//!
//! Each link is fetched on its own task. The enricher waits for all of them
//! before returning, and the i-th output always corresponds to the i-th input.
//! A link whose page cannot be fetched is not dropped: it comes back titled
//! with its href (or anchor text) and described by the error message.

use crate::crawler::document::Document;
use crate::crawler::extractor::{extract_description, extract_title};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::task_group::TaskGroup;
use crate::link::Link;
use crate::progress::{LinkStatus, NoopSink, ProgressSink};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Fetches the target of every link and fills in title and description
pub struct Enricher {
    fetcher: Arc<dyn PageFetcher>,
    sink: Arc<dyn ProgressSink>,
    permits: Option<Arc<Semaphore>>,
}

impl Enricher {
    /// Creates an enricher with no concurrency limit and no progress output
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            sink: Arc::new(NoopSink),
            permits: None,
        }
    }

    /// Reports per-link progress to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Caps the number of fetches in flight; `None` removes the cap
    pub fn with_concurrency_limit(mut self, limit: Option<usize>) -> Self {
        self.permits = limit.map(|n| Arc::new(Semaphore::new(n.max(1))));
        self
    }

    /// Enriches every link concurrently
    ///
    /// Returns once every fetch has finished. The output has the same length
    /// and order as `links`.
    pub async fn enrich(&self, links: Vec<Link>) -> Vec<Link> {
        self.enrich_with_status(links)
            .await
            .into_iter()
            .map(|(link, _)| link)
            .collect()
    }

    /// Like [`Enricher::enrich`], also reporting how each link fared
    pub async fn enrich_with_status(&self, links: Vec<Link>) -> Vec<(Link, LinkStatus)> {
        let total = links.len();
        let mut group = TaskGroup::with_capacity(total);

        for (index, link) in links.iter().cloned().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let sink = Arc::clone(&self.sink);
            let permits = self.permits.clone();

            group.spawn(async move {
                // The semaphore is never closed, so acquiring cannot fail.
                let _permit = match permits {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                let (link, status) = enrich_link(fetcher.as_ref(), link).await;
                sink.link_finished(index, &link, status);
                (link, status)
            });
        }

        let enriched: Vec<(Link, LinkStatus)> = group
            .join_all()
            .await
            .into_iter()
            .zip(links)
            .enumerate()
            .map(|(index, (joined, original))| match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Enrichment task for {} failed: {}", original.href(), e);
                    let link = original.fail(format!("Enrichment task failed: {}", e));
                    self.sink.link_finished(index, &link, LinkStatus::Failed);
                    (link, LinkStatus::Failed)
                }
            })
            .collect();

        let failed = enriched
            .iter()
            .filter(|(_, status)| *status == LinkStatus::Failed)
            .count();
        self.sink.enrichment_finished(total, failed);

        enriched
    }
}

/// Fetches one link's target and builds its enriched form
///
/// The anchor title wins over the fetched title; the href is the last resort.
/// On failure the error text becomes the description.
pub async fn enrich_link(fetcher: &dyn PageFetcher, link: Link) -> (Link, LinkStatus) {
    match fetcher.fetch_page(link.href()).await {
        Ok(body) => {
            let (title, description) = {
                let document = Document::parse(&body);
                (extract_title(&document), extract_description(&document))
            };
            (link.enrich(title, description), LinkStatus::Enriched)
        }
        Err(e) => {
            tracing::debug!("Fetch failed for {}: {}", link.href(), e);
            (link.fail(e.to_string()), LinkStatus::Failed)
        }
    }
}
