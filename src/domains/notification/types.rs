use crate::errors::DomainResult;
use crate::types::UserRef;
use crate::validation::{Validate, ValidationBuilder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delivery status of a notification.
///
/// The dispatch workflow only defines `SENT` and `FAILED`; anything else the
/// feed delivers is preserved verbatim in `Other` so it can be counted as a
/// distinct bucket instead of being silently merged into a visible one.
/// Parsing therefore never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationStatus {
    Sent,
    Failed,
    Other(String),
}

impl NotificationStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "SENT" => NotificationStatus::Sent,
            "FAILED" => NotificationStatus::Failed,
            other => NotificationStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NotificationStatus::Sent => "SENT",
            NotificationStatus::Failed => "FAILED",
            NotificationStatus::Other(s) => s,
        }
    }
}

impl From<String> for NotificationStatus {
    fn from(s: String) -> Self {
        NotificationStatus::parse(&s)
    }
}

impl From<NotificationStatus> for String {
    fn from(status: NotificationStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Denormalized pointer to the document a notification is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedDocumentRef {
    pub id: Uuid,
    pub file_name: Option<String>,
}

/// One delivery attempt recorded by the notification dispatch workflow.
/// Immutable snapshot, same contract as [`DocumentRecord`].
///
/// [`DocumentRecord`]: crate::domains::document::DocumentRecord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: Option<String>,
    pub status: NotificationStatus,
    pub scheduled_time: Option<String>,
    pub sent_time: Option<String>,
    pub target_user: Option<UserRef>,
    pub related_document: Option<RelatedDocumentRef>,
    /// Informational only; the engine never recomputes it.
    pub days_until_expiry: Option<i64>,
}

/// Feed check, same contract as the `DocumentRecord` impl: for ingestion
/// boundaries only, never invoked by the reporting pipeline.
impl Validate for NotificationRecord {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("title", Some(self.title.clone()))
            .required()
            .max_length(255)
            .validate()?;
        Ok(())
    }
}
