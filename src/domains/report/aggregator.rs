use crate::domains::document::DocumentRecord;
use crate::domains::notification::{NotificationRecord, NotificationStatus};
use crate::domains::report::dates::year_month_key;
use crate::domains::report::types::{ClassifiedDocuments, MonthlyUploadCount, ReportSnapshot};
use std::collections::BTreeMap;

/// Number of trailing monthly buckets kept in the upload trend.
const TREND_MONTHS: usize = 6;

/// Compute a [`ReportSnapshot`] from the raw record snapshots and the
/// classified lists produced by the source adapter.
///
/// The expired/expiring counts reuse the adapter's lists rather than
/// re-classifying, so the totals always agree with whatever list the adapter
/// chose (server or fallback). Pure function: no I/O, no mutation of inputs,
/// deterministic for a fixed input.
pub fn aggregate(
    documents: &[DocumentRecord],
    notifications: &[NotificationRecord],
    classified: &ClassifiedDocuments,
) -> ReportSnapshot {
    let mut sent_count = 0i64;
    let mut failed_count = 0i64;
    for notification in notifications {
        match &notification.status {
            NotificationStatus::Sent => sent_count += 1,
            NotificationStatus::Failed => failed_count += 1,
            // Unrecognized statuses count toward the total only
            NotificationStatus::Other(_) => {}
        }
    }

    let mut by_region: BTreeMap<String, i64> = BTreeMap::new();
    let mut by_partner_type: BTreeMap<String, i64> = BTreeMap::new();
    for doc in documents {
        // Documents without the dimension are left out of that grouping
        // entirely; a synthetic "unknown" key would skew chart totals.
        if let Some(region) = doc.region_name() {
            *by_region.entry(region.to_string()).or_insert(0) += 1;
        }
        if let Some(partner_type) = doc.partner_type_name() {
            *by_partner_type.entry(partner_type.to_string()).or_insert(0) += 1;
        }
    }

    ReportSnapshot {
        total_documents: documents.len() as i64,
        expired_count: classified.expired.len() as i64,
        expiring_soon_count: classified.expiring_soon.len() as i64,
        total_notifications: notifications.len() as i64,
        sent_count,
        failed_count,
        by_region,
        by_partner_type,
        monthly_upload_trend: monthly_upload_trend(documents),
    }
}

/// Trailing upload trend: documents bucketed by calendar month of their
/// upload date, ascending, truncated to the most recent [`TREND_MONTHS`]
/// non-empty buckets. Documents without a parseable upload date are skipped;
/// months with no uploads are omitted rather than zero-padded.
fn monthly_upload_trend(documents: &[DocumentRecord]) -> Vec<MonthlyUploadCount> {
    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();
    for doc in documents {
        if let Some(key) = doc.upload_date.as_deref().and_then(year_month_key) {
            *buckets.entry(key).or_insert(0) += 1;
        }
    }

    let skip = buckets.len().saturating_sub(TREND_MONTHS);
    buckets
        .into_iter()
        .skip(skip)
        .map(|(year_month, count)| MonthlyUploadCount { year_month, count })
        .collect()
}
