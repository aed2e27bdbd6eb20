use crate::errors::DomainResult;
use crate::types::UserRef;
use crate::validation::{Validate, ValidationBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Region a document is classified under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRef {
    pub name: String,
    pub code: Option<String>,
}

/// Partner type a document is classified under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerTypeRef {
    pub name: String,
}

/// One uploaded file as delivered by the document-listing source.
///
/// The upstream feed is loosely typed, so every relational and date field is
/// optional and dates arrive as raw strings (RFC 3339 or `YYYY-MM-DD`).
/// Parsing happens lazily and leniently at the point of use; a missing or
/// malformed value degrades (unknown classification, exclusion from a
/// date-keyed grouping, placeholder in an export cell) and is never an error.
///
/// The engine treats records as immutable snapshots and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub file_name: String,
    pub description: Option<String>,
    /// MIME type string, e.g. `application/pdf`.
    pub file_type: Option<String>,
    /// Size in bytes. Negative values can leak out of the feed and are
    /// treated the same as missing.
    pub file_size: Option<i64>,
    /// Timestamp the document was ingested, as delivered by the feed.
    pub upload_date: Option<String>,
    pub validity_date: Option<String>,
    /// Drives lifecycle classification. Absent or unparsable values
    /// classify as unknown rather than failing.
    pub expiry_date: Option<String>,
    pub region_id: Option<Uuid>,
    pub region: Option<RegionRef>,
    pub partner_type_id: Option<Uuid>,
    pub partner_type: Option<PartnerTypeRef>,
    pub uploaded_by: Option<UserRef>,
    pub assigned_user: Option<UserRef>,
}

impl DocumentRecord {
    /// Region name for grouping, `None` when missing or blank.
    pub fn region_name(&self) -> Option<&str> {
        self.region
            .as_ref()
            .map(|r| r.name.trim())
            .filter(|name| !name.is_empty())
    }

    /// Partner type name for grouping, `None` when missing or blank.
    pub fn partner_type_name(&self) -> Option<&str> {
        self.partner_type
            .as_ref()
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
    }
}

/// Contractual feed check for hosts ingesting documents from an untrusted
/// source. Reporting itself never requires it: every data anomaly the
/// engine understands (missing dates, sizes, relations) degrades instead.
impl Validate for DocumentRecord {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("file_name", Some(self.file_name.clone()))
            .required()
            .max_length(255)
            .validate()?;
        if let Some(size) = self.file_size {
            ValidationBuilder::new("file_size", Some(size))
                .min(0)
                .validate()?;
        }
        Ok(())
    }
}
