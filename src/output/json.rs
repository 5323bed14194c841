// JSON Output Module

use crate::Result;
use crate::error::InventoryError;
use crate::inventory::types::InventoryRow;

/// Generate the compact JSON report: an array of rows, keys in field order
pub fn generate_json(rows: &[InventoryRow]) -> Result<String> {
    Ok(serde_json::to_string(rows).map_err(InventoryError::from)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::types::{Source, Visibility};

    fn sample_row() -> InventoryRow {
        InventoryRow {
            arn: "arn:aws:acm:us-east-1:1:certificate/a".to_string(),
            domain_name: "example.com".to_string(),
            subject_alt_names: vec!["example.com".to_string()],
            status: "ISSUED".to_string(),
            not_before: "2025-01-01T00:00:00Z".to_string(),
            not_after: "2026-01-01T00:00:00Z".to_string(),
            in_use_by: vec![],
            issuer: "Amazon".to_string(),
            key_algorithm: "RSA-2048".to_string(),
            acm_type: "AMAZON_ISSUED".to_string(),
            visibility: Some(Visibility::Public),
            source: Some(Source::AwsProvided),
            expiring_in_30d: false,
            is_expired: false,
        }
    }

    #[test]
    fn test_json_generation() {
        let json = generate_json(&[sample_row()]).unwrap();

        assert!(json.starts_with(r#"[{"arn":"arn:aws:acm:us-east-1:1:certificate/a","domain_name":"example.com","subject_alt_names":["example.com"],"status":"ISSUED""#));
        assert!(json.contains(r#""acm_type":"AMAZON_ISSUED","visibility":"PUBLIC","source":"AWS_PROVIDED","expiring_in_30d":false,"is_expired":false}]"#));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(generate_json(&[]).unwrap(), "[]");
    }
}
