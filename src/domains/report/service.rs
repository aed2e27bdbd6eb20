use crate::domains::document::DocumentRecord;
use crate::domains::notification::NotificationRecord;
use crate::domains::report::aggregator::aggregate;
use crate::domains::report::classifier::{classify, ExpiryStatus, DEFAULT_HORIZON_DAYS};
use crate::domains::report::sources::resolve_classified;
use crate::domains::report::types::{ClassifiedDocuments, ReportSnapshot};
use crate::errors::DomainResult;
use crate::validation::ValidationBuilder;
use chrono::NaiveDate;

/// Facade over the reporting pipeline: source resolution, classification,
/// and aggregation behind one configured horizon.
///
/// Stateless apart from the horizon; every method recomputes from the
/// snapshots it is given.
#[derive(Debug, Clone, Copy)]
pub struct ReportService {
    horizon_days: u32,
}

impl Default for ReportService {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl ReportService {
    /// Create a service with a custom lookahead horizon.
    ///
    /// A zero horizon is a caller bug, not a data anomaly, so it fails fast
    /// with a validation error instead of degrading.
    pub fn new(horizon_days: u32) -> DomainResult<Self> {
        ValidationBuilder::new("horizon_days", Some(horizon_days))
            .min(1)
            .validate()?;
        Ok(Self { horizon_days })
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn classify_document(&self, doc: &DocumentRecord, now: NaiveDate) -> ExpiryStatus {
        classify(doc, now, self.horizon_days)
    }

    pub fn resolve_sources(
        &self,
        documents: &[DocumentRecord],
        server_expiring: Option<Vec<DocumentRecord>>,
        server_expired: Option<Vec<DocumentRecord>>,
        now: NaiveDate,
    ) -> ClassifiedDocuments {
        resolve_classified(documents, server_expiring, server_expired, now, self.horizon_days)
    }

    /// Run the full pipeline: resolve classified sources, then aggregate.
    ///
    /// `notifications: None` means the notification source was unavailable;
    /// it degrades to an empty list rather than an error.
    pub fn build_snapshot(
        &self,
        documents: &[DocumentRecord],
        notifications: Option<&[NotificationRecord]>,
        server_expiring: Option<Vec<DocumentRecord>>,
        server_expired: Option<Vec<DocumentRecord>>,
        now: NaiveDate,
    ) -> ReportSnapshot {
        let notifications = match notifications {
            Some(list) => list,
            None => {
                log::warn!("Notification source unavailable, reporting on documents only");
                &[]
            }
        };

        let classified =
            self.resolve_sources(documents, server_expiring, server_expired, now);
        log::debug!(
            "Aggregating report snapshot: {} documents, {} notifications, {} expiring, {} expired",
            documents.len(),
            notifications.len(),
            classified.expiring_soon.len(),
            classified.expired.len()
        );
        aggregate(documents, notifications, &classified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn doc(expiry_date: Option<&str>) -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            file_name: "permit.pdf".to_string(),
            description: None,
            file_type: None,
            file_size: None,
            upload_date: Some("2025-06-01T00:00:00Z".to_string()),
            validity_date: None,
            expiry_date: expiry_date.map(|s| s.to_string()),
            region_id: None,
            region: None,
            partner_type_id: None,
            partner_type: None,
            uploaded_by: None,
            assigned_user: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_horizon() {
        assert!(ReportService::new(0).is_err());
        assert!(ReportService::new(1).is_ok());
        assert_eq!(ReportService::default().horizon_days(), DEFAULT_HORIZON_DAYS);
    }

    #[test]
    fn test_horizon_changes_classification() {
        let service_short = ReportService::new(5).unwrap();
        let service_long = ReportService::new(60).unwrap();
        let record = doc(Some("2025-06-25"));
        let now = day(2025, 6, 15);

        assert_eq!(service_short.classify_document(&record, now), ExpiryStatus::Active);
        assert_eq!(service_long.classify_document(&record, now), ExpiryStatus::ExpiringSoon);
    }

    #[test]
    fn test_build_snapshot_runs_full_pipeline() {
        let documents = vec![
            doc(Some("2025-06-10")),
            doc(Some("2025-06-30")),
            doc(None),
        ];
        let service = ReportService::default();
        let snapshot = service.build_snapshot(&documents, Some(&[]), None, None, day(2025, 6, 15));

        assert_eq!(snapshot.total_documents, 3);
        assert_eq!(snapshot.expired_count, 1);
        assert_eq!(snapshot.expiring_soon_count, 1);
        assert_eq!(snapshot.total_notifications, 0);
    }

    #[test]
    fn test_missing_notification_source_degrades_to_empty() {
        let documents = vec![doc(Some("2025-06-30"))];
        let service = ReportService::default();
        let snapshot = service.build_snapshot(&documents, None, None, None, day(2025, 6, 15));

        assert_eq!(snapshot.total_notifications, 0);
        assert_eq!(snapshot.sent_count, 0);
        assert_eq!(snapshot.failed_count, 0);
    }
}
