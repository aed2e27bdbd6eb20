use crate::domains::document::DocumentRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expiring/expired document lists with a consistent, de-duplicated view,
/// produced by [`resolve_classified`](crate::domains::report::resolve_classified).
///
/// The `*_from_fallback` flags record that the corresponding bucket was
/// recomputed locally because its upstream source was unavailable. Hosts may
/// surface that as a degraded-data notice; the engine itself only logs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedDocuments {
    pub expiring_soon: Vec<DocumentRecord>,
    pub expired: Vec<DocumentRecord>,
    pub expiring_from_fallback: bool,
    pub expired_from_fallback: bool,
}

/// One month of upload activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyUploadCount {
    /// `"YYYY-MM"` calendar bucket.
    pub year_month: String,
    pub count: i64,
}

/// Computed summary of documents and notifications at one point in time.
///
/// Value object: recomputed in full by every aggregation call, never updated
/// in place. Grouping maps are keyed by display name and sorted (BTreeMap),
/// which keeps serialized snapshots byte-for-byte reproducible for a fixed
/// input; key order carries no meaning beyond display.
///
/// `expired_count + expiring_soon_count` is not bounded by `total_documents`:
/// a document with no expiry date is in neither bucket, and server-supplied
/// classified lists are trusted as-is even if their windows overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    pub total_documents: i64,
    pub expired_count: i64,
    pub expiring_soon_count: i64,
    pub total_notifications: i64,
    pub sent_count: i64,
    pub failed_count: i64,
    pub by_region: BTreeMap<String, i64>,
    pub by_partner_type: BTreeMap<String, i64>,
    /// Chronologically ascending, at most 6 entries, empty months omitted.
    pub monthly_upload_trend: Vec<MonthlyUploadCount>,
}
