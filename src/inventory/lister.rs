// Certificate Lister - paginated enumeration across every lifecycle status

use crate::Result;
use crate::error::InventoryError;
use crate::inventory::types::{CertificateStatus, CertificateSummary};
use crate::services::CertificateService;
use std::collections::HashSet;

/// List every certificate in the account/region
///
/// Requests all lifecycle statuses on each page and follows continuation
/// tokens until the service stops returning one. Order is whatever the
/// service returns. A failing page, or a token the service already handed
/// out, aborts the listing.
pub async fn list_all_certificates(
    service: &dyn CertificateService,
) -> Result<Vec<CertificateSummary>> {
    let statuses = CertificateStatus::all();
    let mut summaries = Vec::new();
    let mut next_token: Option<String> = None;
    let mut seen_tokens = HashSet::new();
    let mut pages = 0usize;

    loop {
        let page = service.list_page(&statuses, next_token.take()).await?;
        pages += 1;

        for summary in page.summaries {
            if summary.arn.is_empty() {
                tracing::warn!("Skipping certificate summary without an ARN");
                continue;
            }
            summaries.push(summary);
        }

        match page.next_token {
            Some(token) if !token.is_empty() => {
                if !seen_tokens.insert(token.clone()) {
                    return Err(InventoryError::Listing {
                        message: format!("pagination token {:?} returned twice", token),
                    }
                    .into());
                }
                next_token = Some(token);
            }
            _ => break,
        }
    }

    tracing::info!(
        "Listed {} certificates across {} page(s)",
        summaries.len(),
        pages
    );

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::types::{CertificateDetail, CertificatePage};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Serves canned pages keyed by the incoming token
    struct PagedService {
        pages: Vec<(Option<&'static str>, Vec<&'static str>, Option<&'static str>)>,
        seen: Mutex<Vec<(usize, Option<String>)>>,
    }

    #[async_trait]
    impl CertificateService for PagedService {
        async fn list_page(
            &self,
            statuses: &[CertificateStatus],
            next_token: Option<String>,
        ) -> Result<CertificatePage> {
            self.seen
                .lock()
                .unwrap()
                .push((statuses.len(), next_token.clone()));

            let (_, arns, next) = self
                .pages
                .iter()
                .find(|(token, _, _)| token.map(str::to_string) == next_token)
                .ok_or_else(|| InventoryError::Listing {
                    message: format!("unexpected token {:?}", next_token),
                })?;

            Ok(CertificatePage {
                summaries: arns.iter().map(|a| CertificateSummary::new(*a)).collect(),
                next_token: next.map(str::to_string),
            })
        }

        async fn describe(&self, arn: &str) -> Result<CertificateDetail> {
            Ok(CertificateDetail::new(arn))
        }
    }

    #[tokio::test]
    async fn test_follows_tokens_until_exhausted() {
        let service = PagedService {
            pages: vec![
                (None, vec!["arn-1", "arn-2"], Some("t1")),
                (Some("t1"), vec!["arn-3"], Some("t2")),
                (Some("t2"), vec!["arn-4"], None),
            ],
            seen: Mutex::new(Vec::new()),
        };

        let summaries = list_all_certificates(&service).await.unwrap();
        let arns: Vec<&str> = summaries.iter().map(|s| s.arn.as_str()).collect();
        assert_eq!(arns, vec!["arn-1", "arn-2", "arn-3", "arn-4"]);

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|(status_count, _)| *status_count == 8));
        assert_eq!(seen[1].1.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_empty_token_ends_listing() {
        let service = PagedService {
            pages: vec![(None, vec!["arn-1"], Some(""))],
            seen: Mutex::new(Vec::new()),
        };

        let summaries = list_all_certificates(&service).await.unwrap();
        assert_eq!(summaries.len(), 1);
    }

    #[tokio::test]
    async fn test_skips_summaries_without_arn() {
        let service = PagedService {
            pages: vec![(None, vec!["", "arn-1"], None)],
            seen: Mutex::new(Vec::new()),
        };

        let summaries = list_all_certificates(&service).await.unwrap();
        assert_eq!(summaries, vec![CertificateSummary::new("arn-1")]);
    }

    #[tokio::test]
    async fn test_page_failure_is_fatal() {
        let service = PagedService {
            pages: vec![(None, vec!["arn-1"], Some("missing"))],
            seen: Mutex::new(Vec::new()),
        };

        let err = list_all_certificates(&service).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::Listing { .. })
        ));
    }

    #[tokio::test]
    async fn test_repeated_token_aborts_listing() {
        let service = PagedService {
            pages: vec![
                (None, vec!["arn-1"], Some("same")),
                (Some("same"), vec!["arn-2"], Some("same")),
            ],
            seen: Mutex::new(Vec::new()),
        };

        let err = list_all_certificates(&service).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InventoryError>(),
            Some(InventoryError::Listing { .. })
        ));
        assert_eq!(service.seen.lock().unwrap().len(), 2);
    }
}
