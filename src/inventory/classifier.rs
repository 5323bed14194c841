// Classifier - flattens one certificate record into a report row
//
// Pure: the only input besides the record is the run's single "now" snapshot,
// so every row of one report is judged against the same instant.

use crate::constants::EXPIRY_WARNING_DAYS;
use crate::inventory::timestamp;
use crate::inventory::types::{
    CertificateDetail, CertificateType, DetailResult, InventoryRow, Source, Visibility,
};
use chrono::{DateTime, Utc};

/// Expiry flags derived from not-after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpiryState {
    pub expiring_in_30d: bool,
    pub is_expired: bool,
}

impl ExpiryState {
    /// Derive flags for `not_after` as seen at `now`
    ///
    /// Expired means strictly before `now`. Expiring means not yet passed and
    /// at most 30 whole days remaining. Absent not-after sets neither flag.
    pub fn evaluate(not_after: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match not_after {
            None => Self::default(),
            Some(not_after) => {
                let is_expired = not_after < now;
                let expiring_in_30d =
                    !is_expired && (not_after - now).num_days() <= EXPIRY_WARNING_DAYS;
                Self {
                    expiring_in_30d,
                    is_expired,
                }
            }
        }
    }
}

/// PRIVATE only for certificates from a private CA
pub fn visibility_for(certificate_type: Option<&CertificateType>) -> Visibility {
    match certificate_type {
        Some(CertificateType::Private) => Visibility::Private,
        _ => Visibility::Public,
    }
}

/// CUSTOMER_PROVIDED only for imported certificates
pub fn source_for(certificate_type: Option<&CertificateType>) -> Source {
    match certificate_type {
        Some(CertificateType::Imported) => Source::CustomerProvided,
        _ => Source::AwsProvided,
    }
}

/// Flatten a detail lookup result into a row
pub fn classify(result: &DetailResult, now: DateTime<Utc>) -> InventoryRow {
    match result {
        DetailResult::Fetched(detail) => classify_detail(detail, now),
        DetailResult::Failed { arn, .. } => InventoryRow {
            arn: arn.clone(),
            ..Default::default()
        },
    }
}

/// Flatten every result against the same `now`
pub fn classify_all(results: &[DetailResult], now: DateTime<Utc>) -> Vec<InventoryRow> {
    results.iter().map(|r| classify(r, now)).collect()
}

fn classify_detail(detail: &CertificateDetail, now: DateTime<Utc>) -> InventoryRow {
    let certificate_type = detail.certificate_type.as_ref();
    let expiry = ExpiryState::evaluate(
        detail.not_after.as_ref().and_then(|t| t.to_datetime()),
        now,
    );

    InventoryRow {
        arn: detail.arn.clone(),
        domain_name: detail.domain_name.clone().unwrap_or_default(),
        subject_alt_names: detail.subject_alt_names.clone(),
        status: detail
            .status
            .as_ref()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default(),
        not_before: timestamp::normalize(detail.not_before.as_ref()),
        not_after: timestamp::normalize(detail.not_after.as_ref()),
        in_use_by: detail.in_use_by.clone(),
        issuer: detail.issuer.clone().unwrap_or_default(),
        key_algorithm: detail.key_algorithm.clone().unwrap_or_default(),
        acm_type: certificate_type
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        visibility: Some(visibility_for(certificate_type)),
        source: Some(source_for(certificate_type)),
        expiring_in_30d: expiry.expiring_in_30d,
        is_expired: expiry.is_expired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::types::{CertificateStatus, Timestamp};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn detail_expiring_at(not_after: Option<DateTime<Utc>>) -> DetailResult {
        let mut detail = CertificateDetail::new("arn:aws:acm:us-east-1:1:certificate/x");
        detail.not_after = not_after.map(Timestamp::Instant);
        DetailResult::Fetched(detail)
    }

    #[test]
    fn test_past_not_after_is_expired() {
        let row = classify(&detail_expiring_at(Some(now() - Duration::seconds(1))), now());
        assert!(row.is_expired);
        assert!(!row.expiring_in_30d);
    }

    #[test]
    fn test_exactly_30_days_is_expiring() {
        let row = classify(&detail_expiring_at(Some(now() + Duration::days(30))), now());
        assert!(row.expiring_in_30d);
        assert!(!row.is_expired);
    }

    #[test]
    fn test_30_days_and_some_hours_is_still_expiring() {
        let not_after = now() + Duration::days(30) + Duration::hours(23);
        let row = classify(&detail_expiring_at(Some(not_after)), now());
        assert!(row.expiring_in_30d);
    }

    #[test]
    fn test_31_days_or_more_is_neither() {
        for days in [31, 90, 400] {
            let row = classify(&detail_expiring_at(Some(now() + Duration::days(days))), now());
            assert!(!row.expiring_in_30d, "{} days", days);
            assert!(!row.is_expired, "{} days", days);
        }
    }

    #[test]
    fn test_not_after_equal_to_now_is_expiring_not_expired() {
        let row = classify(&detail_expiring_at(Some(now())), now());
        assert!(row.expiring_in_30d);
        assert!(!row.is_expired);
    }

    #[test]
    fn test_absent_not_after() {
        let row = classify(&detail_expiring_at(None), now());
        assert!(!row.expiring_in_30d);
        assert!(!row.is_expired);
        assert_eq!(row.not_before, "");
        assert_eq!(row.not_after, "");
    }

    #[test]
    fn test_unparseable_not_after_is_kept_but_not_judged() {
        let mut detail = CertificateDetail::new("arn");
        detail.not_after = Some(Timestamp::Raw("soon".to_string()));
        let row = classify(&DetailResult::Fetched(detail), now());
        assert_eq!(row.not_after, "soon");
        assert!(!row.expiring_in_30d);
        assert!(!row.is_expired);
    }

    #[test]
    fn test_raw_not_after_is_parsed() {
        let mut detail = CertificateDetail::new("arn");
        detail.not_after = Some(Timestamp::Raw("2025-05-01T00:00:00+00:00".to_string()));
        let row = classify(&DetailResult::Fetched(detail), now());
        assert_eq!(row.not_after, "2025-05-01T00:00:00Z");
        assert!(row.is_expired);
    }

    #[test]
    fn test_flags_never_both_true() {
        for offset in -40..40 {
            let not_after = now() + Duration::days(offset) + Duration::minutes(offset * 7);
            let expiry = ExpiryState::evaluate(Some(not_after), now());
            assert!(!(expiry.expiring_in_30d && expiry.is_expired));
        }
    }

    #[test]
    fn test_type_derivation() {
        let imported = Some(&CertificateType::Imported);
        assert_eq!(source_for(imported), Source::CustomerProvided);
        assert_eq!(visibility_for(imported), Visibility::Public);

        let private = Some(&CertificateType::Private);
        assert_eq!(visibility_for(private), Visibility::Private);
        assert_eq!(source_for(private), Source::AwsProvided);

        for other in [
            Some(&CertificateType::AmazonIssued),
            Some(&CertificateType::Other("FUTURE".to_string())),
            None,
        ] {
            assert_eq!(source_for(other), Source::AwsProvided);
            assert_eq!(visibility_for(other), Visibility::Public);
        }
    }

    #[test]
    fn test_full_detail_is_flattened() {
        let detail = CertificateDetail {
            arn: "arn:aws:acm:us-east-1:1:certificate/full".to_string(),
            domain_name: Some("example.com".to_string()),
            subject_alt_names: vec!["example.com".to_string(), "www.example.com".to_string()],
            status: Some(CertificateStatus::Issued),
            not_before: Some(Timestamp::Instant(now() - Duration::days(300))),
            not_after: Some(Timestamp::Instant(now() + Duration::days(65))),
            in_use_by: vec!["arn:aws:elasticloadbalancing:lb".to_string()],
            issuer: Some("Amazon".to_string()),
            key_algorithm: Some("RSA-2048".to_string()),
            certificate_type: Some(CertificateType::AmazonIssued),
        };

        let row = classify(&DetailResult::Fetched(detail), now());

        assert_eq!(row.domain_name, "example.com");
        assert_eq!(row.status, "ISSUED");
        assert_eq!(row.acm_type, "AMAZON_ISSUED");
        assert_eq!(row.not_after, "2025-08-05T12:00:00Z");
        assert_eq!(row.visibility_str(), "PUBLIC");
        assert_eq!(row.source_str(), "AWS_PROVIDED");
        assert_eq!(row.in_use_by.len(), 1);
        assert!(!row.expiring_in_30d);
    }

    #[test]
    fn test_failed_stub_yields_degraded_row() {
        let stub = DetailResult::Failed {
            arn: "arn-broken".to_string(),
            error: "AccessDenied".to_string(),
        };

        let row = classify(&stub, now());

        assert_eq!(row.arn, "arn-broken");
        assert_eq!(row.status, "");
        assert_eq!(row.visibility_str(), "");
        assert_eq!(row.source_str(), "");
        assert!(row.subject_alt_names.is_empty());
        assert!(!row.expiring_in_30d && !row.is_expired);
    }
}
