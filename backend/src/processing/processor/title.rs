use crate::library::{clean_title, MediaCatalog};
use crate::model::TitleCleanerConfig;
use log::{debug, error, info, warn};
use shared::model::CleanReport;
use std::io;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs the title cleaner over every movie of a catalog.
pub struct TitleProcessor {
    config: Arc<TitleCleanerConfig>,
    dry_run: bool,
}

impl TitleProcessor {
    pub fn new(config: Arc<TitleCleanerConfig>, dry_run: bool) -> Self {
        Self { config, dry_run }
    }

    /// `progress` is called with the completed percentage after each item.
    /// Cancellation is checked between items, never in the middle of one.
    pub async fn process<C, F>(&self, catalog: &C, cancel: &CancellationToken, mut progress: F) -> io::Result<CleanReport>
    where
        C: MediaCatalog,
        F: FnMut(f64),
    {
        let items = catalog.list_movies().await?;
        let total = items.len();
        info!("Cleaning {total} titles{}", if self.dry_run { " (dry run)" } else { "" });

        let mut report = CleanReport::default();
        for item in &items {
            if cancel.is_cancelled() {
                warn!("Title cleaning cancelled after {} of {total} items", report.processed);
                report.cancelled = true;
                break;
            }

            let cleaned = clean_title(&item.name, &self.config);
            report.processed += 1;
            if cleaned != item.name {
                debug!("'{}' -> '{cleaned}'", item.name);
                if self.dry_run {
                    report.add_change(&item.name, &cleaned);
                } else {
                    match catalog.update_name(item, &cleaned).await {
                        Ok(()) => report.add_change(&item.name, &cleaned),
                        Err(err) => {
                            error!("Failed to rename '{}' to '{cleaned}': {err}", item.name);
                            report.failed += 1;
                        }
                    }
                }
            }

            #[allow(clippy::cast_precision_loss)]
            progress(report.processed as f64 * 100.0 / total as f64);
        }

        report.finish(total, self.dry_run);
        info!("{}", report.message);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{CatalogItem, TitleListCatalog};
    use std::future::Future;

    fn titles() -> Vec<String> {
        vec![
            "The Matrix 1999 2160p BluRay x265 10bit HDR DTS-HD MA 5.1-SWTYBLZ".to_string(),
            "Pulp Fiction".to_string(),
            "[YTS.MX] Inception (2010) [1080p] [BluRay] [5.1] [YTS] [YIFY]".to_string(),
        ]
    }

    struct FailingCatalog;

    impl MediaCatalog for FailingCatalog {
        fn list_movies(&self) -> impl Future<Output=io::Result<Vec<CatalogItem>>> + Send {
            async {
                Ok(vec![CatalogItem { id: "1".to_string(), name: "Heat.1995.720p".to_string(), path: None }])
            }
        }

        fn update_name(&self, _item: &CatalogItem, _new_name: &str) -> impl Future<Output=io::Result<()>> + Send {
            async { Err(io::Error::new(io::ErrorKind::PermissionDenied, "read only")) }
        }
    }

    #[tokio::test]
    async fn test_process_renames_changed_titles() {
        let catalog = TitleListCatalog::new(titles());
        let processor = TitleProcessor::new(Arc::new(TitleCleanerConfig::default()), false);
        let mut steps = vec![];
        let report = processor.process(&catalog, &CancellationToken::new(), |p| steps.push(p)).await.unwrap();

        assert_eq!(report.processed, 3);
        assert_eq!(report.changed, 2);
        assert_eq!(report.failed, 0);
        assert!(report.success);
        assert_eq!(report.changes[0].after, "The Matrix");
        assert_eq!(report.changes[1].after, "Inception");
        assert_eq!(steps.len(), 3);
        assert!((steps[2] - 100.0).abs() < f64::EPSILON);

        let renamed = catalog.renamed();
        assert_eq!(renamed.len(), 2);
        assert_eq!(renamed.get("0").map(String::as_str), Some("The Matrix"));
        assert!(!renamed.contains_key("1"));
    }

    #[tokio::test]
    async fn test_dry_run_does_not_rename() {
        let catalog = TitleListCatalog::new(titles());
        let processor = TitleProcessor::new(Arc::new(TitleCleanerConfig::default()), true);
        let report = processor.process(&catalog, &CancellationToken::new(), |_| {}).await.unwrap();

        assert_eq!(report.changed, 2);
        assert!(catalog.renamed().is_empty());
        assert_eq!(report.message, "Processed 3 of 3 items, 2 would be renamed");
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let catalog = TitleListCatalog::new(titles());
        let processor = TitleProcessor::new(Arc::new(TitleCleanerConfig::default()), false);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let report = processor.process(&catalog, &cancel, |_| {}).await.unwrap();

        assert_eq!(report.processed, 0);
        assert!(report.cancelled);
        assert!(!report.success);
    }

    #[tokio::test]
    async fn test_cancel_between_items() {
        let catalog = TitleListCatalog::new(titles());
        let processor = TitleProcessor::new(Arc::new(TitleCleanerConfig::default()), true);
        let cancel = CancellationToken::new();
        let report = processor.process(&catalog, &cancel, |_| cancel.cancel()).await.unwrap();

        assert_eq!(report.processed, 1);
        assert!(report.cancelled);
        assert_eq!(report.message, "Processed 1 of 3 items, 1 would be renamed, cancelled");
    }

    #[tokio::test]
    async fn test_failed_rename_is_counted() {
        let processor = TitleProcessor::new(Arc::new(TitleCleanerConfig::default()), false);
        let report = processor.process(&FailingCatalog, &CancellationToken::new(), |_| {}).await.unwrap();

        assert_eq!(report.processed, 1);
        assert_eq!(report.changed, 0);
        assert_eq!(report.failed, 1);
        assert!(!report.success);
    }
}
