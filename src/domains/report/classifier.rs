use crate::domains::document::DocumentRecord;
use crate::domains::report::dates::parse_calendar_date;
use crate::errors::DomainError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default lookahead window for the expiring-soon bucket, in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 30;

/// Lifecycle state of a document relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpiryStatus {
    Active,
    ExpiringSoon,
    Expired,
    Unknown,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Active => "active",
            ExpiryStatus::ExpiringSoon => "expiring_soon",
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Unknown => "unknown",
        }
    }
}

impl FromStr for ExpiryStatus {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ExpiryStatus::Active),
            "expiring_soon" => Ok(ExpiryStatus::ExpiringSoon),
            "expired" => Ok(ExpiryStatus::Expired),
            "unknown" => Ok(ExpiryStatus::Unknown),
            _ => Err(DomainError::Internal(format!("Invalid ExpiryStatus string: {}", s))),
        }
    }
}

impl From<ExpiryStatus> for String {
    fn from(status: ExpiryStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Classify one document against a reference date and lookahead horizon.
///
/// Pure function; every document lands in exactly one bucket per call:
/// - no parseable expiry date: `Unknown`
/// - expiry on or before `now`: `Expired` (an expiry date of today counts
///   as already expired)
/// - expiry within `horizon_days` after `now`: `ExpiringSoon`
/// - otherwise: `Active`
///
/// Deriving the expired and expiring sets from this single partition is what
/// keeps them mutually exclusive; computing the two windows independently
/// would let an expired document also satisfy "expires within N days".
pub fn classify(doc: &DocumentRecord, now: NaiveDate, horizon_days: u32) -> ExpiryStatus {
    let expiry = match doc.expiry_date.as_deref().and_then(parse_calendar_date) {
        Some(date) => date,
        None => return ExpiryStatus::Unknown,
    };

    if expiry <= now {
        ExpiryStatus::Expired
    } else if expiry <= now + Duration::days(i64::from(horizon_days)) {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Active
    }
}
