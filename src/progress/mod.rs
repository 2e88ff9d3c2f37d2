//! Progress reporting
//!
//! The pipeline never prints on its own. Everything a user might want to see
//! while a run is in flight goes through a [`ProgressSink`], so callers decide
//! where it ends up: the log ([`TracingSink`]), nowhere ([`NoopSink`]), or a
//! buffer that tests can inspect ([`RecordingSink`]).

use crate::link::Link;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Outcome of enriching a single link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// The target page was fetched and parsed
    Enriched,
    /// The target page could not be fetched; the link carries the error text
    Failed,
}

/// Receiver for pipeline progress events
///
/// Implementations are shared between enrichment tasks and must be
/// thread-safe. Events for individual links arrive in completion order, not
/// input order.
pub trait ProgressSink: Send + Sync {
    /// The root page was fetched and `link_count` outbound links were kept
    fn root_fetched(&self, _url: &str, _link_count: usize) {}

    /// One link finished enrichment; `index` is its position in the input
    fn link_finished(&self, _index: usize, _link: &Link, _status: LinkStatus) {}

    /// Every enrichment task has completed
    fn enrichment_finished(&self, _total: usize, _failed: usize) {}

    /// The Markdown file was written
    fn output_written(&self, _path: &Path, _link_count: usize) {}
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {}

/// Sink that reports progress through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn root_fetched(&self, url: &str, link_count: usize) {
        tracing::info!("Found {} links on {}", link_count, url);
    }

    fn link_finished(&self, index: usize, link: &Link, status: LinkStatus) {
        match status {
            LinkStatus::Enriched => {
                tracing::debug!("[{}] Enriched {}", index, link.href());
            }
            LinkStatus::Failed => {
                tracing::warn!(
                    "[{}] Could not enrich {}: {}",
                    index,
                    link.href(),
                    link.description().unwrap_or_default()
                );
            }
        }
    }

    fn enrichment_finished(&self, total: usize, failed: usize) {
        tracing::info!("Processed {} links ({} failed)", total, failed);
    }

    fn output_written(&self, path: &Path, link_count: usize) {
        tracing::info!("Wrote {} links to {}", link_count, path.display());
    }
}

/// A progress event captured by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    RootFetched { url: String, link_count: usize },
    LinkFinished { index: usize, href: String, status: LinkStatus },
    EnrichmentFinished { total: usize, failed: usize },
    OutputWritten { path: PathBuf, link_count: usize },
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.lock().clone()
    }

    fn record(&self, event: ProgressEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ProgressEvent>> {
        // A panicking recorder must not take the rest of the run down with it.
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressSink for RecordingSink {
    fn root_fetched(&self, url: &str, link_count: usize) {
        self.record(ProgressEvent::RootFetched {
            url: url.to_string(),
            link_count,
        });
    }

    fn link_finished(&self, index: usize, link: &Link, status: LinkStatus) {
        self.record(ProgressEvent::LinkFinished {
            index,
            href: link.href().to_string(),
            status,
        });
    }

    fn enrichment_finished(&self, total: usize, failed: usize) {
        self.record(ProgressEvent::EnrichmentFinished { total, failed });
    }

    fn output_written(&self, path: &Path, link_count: usize) {
        self.record(ProgressEvent::OutputWritten {
            path: path.to_path_buf(),
            link_count,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.root_fetched("http://example.com/", 2);
        sink.enrichment_finished(2, 1);

        assert_eq!(
            sink.events(),
            vec![
                ProgressEvent::RootFetched {
                    url: "http://example.com/".to_string(),
                    link_count: 2,
                },
                ProgressEvent::EnrichmentFinished {
                    total: 2,
                    failed: 1
                },
            ]
        );
    }

    #[test]
    fn test_recording_sink_link_event() {
        let sink = RecordingSink::new();
        let link = Link::new("http://other.com/", None);
        sink.link_finished(3, &link, LinkStatus::Failed);

        assert_eq!(
            sink.events(),
            vec![ProgressEvent::LinkFinished {
                index: 3,
                href: "http://other.com/".to_string(),
                status: LinkStatus::Failed,
            }]
        );
    }

    #[test]
    fn test_noop_sink_accepts_events() {
        let sink = NoopSink;
        sink.root_fetched("http://example.com/", 0);
        sink.output_written(Path::new("links.md"), 0);
    }
}
