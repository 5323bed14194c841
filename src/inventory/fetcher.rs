// Detail Fetcher - per-certificate lookups with failure isolation

use crate::inventory::types::{CertificateSummary, DetailResult};
use crate::services::CertificateService;
use futures::stream::{self, StreamExt};

/// Fetch the full record for one certificate
///
/// Never fails: a lookup error becomes a `DetailResult::Failed` stub so one
/// inaccessible certificate cannot blank the whole report.
pub async fn fetch_detail(service: &dyn CertificateService, arn: &str) -> DetailResult {
    match service.describe(arn).await {
        Ok(mut detail) => {
            if detail.arn.is_empty() {
                detail.arn = arn.to_string();
            }
            DetailResult::Fetched(detail)
        }
        Err(e) => {
            let error = format!("{:#}", e);
            tracing::warn!("Failed to describe {}: {}", arn, error);
            DetailResult::Failed {
                arn: arn.to_string(),
                error,
            }
        }
    }
}

/// Fetch details for every summary with at most `concurrency` lookups in flight
///
/// The output has one entry per summary, in input order.
pub async fn fetch_all(
    service: &dyn CertificateService,
    summaries: &[CertificateSummary],
    concurrency: usize,
) -> Vec<DetailResult> {
    let concurrency = concurrency.max(1);

    let results: Vec<DetailResult> = stream::iter(summaries)
        .map(|summary| fetch_detail(service, &summary.arn))
        .buffered(concurrency)
        .collect()
        .await;

    let failed = results.iter().filter(|r| r.is_failed()).count();
    if failed > 0 {
        tracing::warn!(
            "{} of {} certificate lookups failed; degraded rows will be reported",
            failed,
            results.len()
        );
    } else {
        tracing::debug!("Fetched {} certificate details", results.len());
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::error::InventoryError;
    use crate::inventory::types::{CertificateDetail, CertificatePage, CertificateStatus};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FlakyService {
        failing_arn: &'static str,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl FlakyService {
        fn new(failing_arn: &'static str) -> Self {
            Self {
                failing_arn,
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CertificateService for FlakyService {
        async fn list_page(
            &self,
            _statuses: &[CertificateStatus],
            _next_token: Option<String>,
        ) -> Result<CertificatePage> {
            Ok(CertificatePage::default())
        }

        async fn describe(&self, arn: &str) -> Result<CertificateDetail> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if arn == self.failing_arn {
                return Err(InventoryError::Describe {
                    arn: arn.to_string(),
                    message: "AccessDeniedException".to_string(),
                }
                .into());
            }
            Ok(CertificateDetail::new(arn))
        }
    }

    fn summaries(arns: &[&str]) -> Vec<CertificateSummary> {
        arns.iter().map(|a| CertificateSummary::new(*a)).collect()
    }

    #[tokio::test]
    async fn test_failure_becomes_stub() {
        let service = FlakyService::new("arn-bad");
        let result = fetch_detail(&service, "arn-bad").await;

        match result {
            DetailResult::Failed { arn, error } => {
                assert_eq!(arn, "arn-bad");
                assert!(error.contains("AccessDeniedException"));
            }
            other => panic!("expected failure stub, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_preserves_order_and_length() {
        let service = FlakyService::new("arn-2");
        let input = summaries(&["arn-1", "arn-2", "arn-3"]);

        let results = fetch_all(&service, &input, 2).await;

        assert_eq!(results.len(), 3);
        let arns: Vec<&str> = results.iter().map(|r| r.arn()).collect();
        assert_eq!(arns, vec!["arn-1", "arn-2", "arn-3"]);
        assert!(results[1].is_failed());
        assert!(!results[0].is_failed());
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let service = FlakyService::new("none");
        let input = summaries(&["a", "b", "c", "d", "e", "f", "g", "h"]);

        fetch_all(&service, &input, 3).await;

        assert!(service.max_in_flight.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn test_zero_concurrency_still_fetches() {
        let service = FlakyService::new("none");
        let results = fetch_all(&service, &summaries(&["a", "b"]), 0).await;
        assert_eq!(results.len(), 2);
        assert_eq!(service.max_in_flight.load(Ordering::SeqCst), 1);
    }
}
