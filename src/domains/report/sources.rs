use crate::domains::document::DocumentRecord;
use crate::domains::report::classifier::{classify, ExpiryStatus};
use crate::domains::report::types::ClassifiedDocuments;
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

/// Produce a consistent expiring/expired pair even when one or both upstream
/// pre-classified sources are unavailable.
///
/// `None` for a server list means "source failed". A present list is trusted
/// as-is for its bucket (no re-validation); an absent one is replaced by the
/// locally recomputed partition of the full snapshot. Each returned list is
/// de-duplicated by document id, first occurrence kept.
///
/// Source failure is recovered entirely here and never escalated: this
/// function always returns both lists.
pub fn resolve_classified(
    documents: &[DocumentRecord],
    server_expiring: Option<Vec<DocumentRecord>>,
    server_expired: Option<Vec<DocumentRecord>>,
    now: NaiveDate,
    horizon_days: u32,
) -> ClassifiedDocuments {
    let expiring_from_fallback = server_expiring.is_none();
    let expired_from_fallback = server_expired.is_none();

    let (local_expiring, local_expired) = if expiring_from_fallback || expired_from_fallback {
        partition_by_classification(documents, now, horizon_days)
    } else {
        (Vec::new(), Vec::new())
    };

    let expiring_soon = match server_expiring {
        Some(list) => list,
        None => {
            log::warn!(
                "Expiring-documents source unavailable, falling back to local classification ({} candidates)",
                local_expiring.len()
            );
            local_expiring
        }
    };
    let expired = match server_expired {
        Some(list) => list,
        None => {
            log::warn!(
                "Expired-documents source unavailable, falling back to local classification ({} candidates)",
                local_expired.len()
            );
            local_expired
        }
    };

    ClassifiedDocuments {
        expiring_soon: dedup_by_id(expiring_soon),
        expired: dedup_by_id(expired),
        expiring_from_fallback,
        expired_from_fallback,
    }
}

/// Single-pass partition of the snapshot into the two lookahead buckets.
fn partition_by_classification(
    documents: &[DocumentRecord],
    now: NaiveDate,
    horizon_days: u32,
) -> (Vec<DocumentRecord>, Vec<DocumentRecord>) {
    let mut expiring = Vec::new();
    let mut expired = Vec::new();
    for doc in documents {
        match classify(doc, now, horizon_days) {
            ExpiryStatus::ExpiringSoon => expiring.push(doc.clone()),
            ExpiryStatus::Expired => expired.push(doc.clone()),
            ExpiryStatus::Active | ExpiryStatus::Unknown => {}
        }
    }
    (expiring, expired)
}

fn dedup_by_id(documents: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
    let mut seen: HashSet<Uuid> = HashSet::with_capacity(documents.len());
    documents
        .into_iter()
        .filter(|doc| seen.insert(doc.id))
        .collect()
}
