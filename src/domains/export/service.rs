use crate::domains::document::DocumentRecord;
use crate::domains::notification::NotificationRecord;
use crate::domains::report::types::ReportSnapshot;
use crate::domains::export::sheet_record::{DocumentSheetRow, SheetRecord};
use chrono::NaiveDate;
use serde::Serialize;

pub const FILES_SHEET_NAME: &str = "Files";
pub const NOTIFICATIONS_SHEET_NAME: &str = "Notifications";
pub const STATISTICS_SHEET_NAME: &str = "Statistics";

/// A named table of rows ready for tabular serialization.
///
/// This engine only builds the row/column data; writing an actual workbook
/// file (and naming it) belongs to the spreadsheet-writing collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new<R: SheetRecord>(name: &str, records: impl IntoIterator<Item = R>) -> Self {
        Self {
            name: name.to_string(),
            headers: R::headers(),
            rows: records.into_iter().map(|r| r.to_row()).collect(),
        }
    }
}

/// One row per document, fixed 11-column layout. `now` drives the
/// Expired/Active status column. Missing fields render as their documented
/// placeholders; a malformed record formats with fallbacks rather than
/// failing the whole export.
pub fn format_document_sheet(documents: &[DocumentRecord], now: NaiveDate) -> Sheet {
    Sheet::new(
        FILES_SHEET_NAME,
        documents.iter().map(|doc| DocumentSheetRow { doc, now }),
    )
}

/// One row per notification.
pub fn format_notification_sheet(notifications: &[NotificationRecord]) -> Sheet {
    Sheet::new(NOTIFICATIONS_SHEET_NAME, notifications.iter().cloned())
}

/// Exactly one row carrying the six scalar counters of the snapshot.
pub fn format_statistics_sheet(snapshot: &ReportSnapshot) -> Sheet {
    Sheet::new(STATISTICS_SHEET_NAME, std::iter::once(snapshot.clone()))
}

/// All three sheets under their fixed names, in the order consumers display
/// them: Files, Notifications, Statistics.
pub fn format_comprehensive_report(
    documents: &[DocumentRecord],
    notifications: &[NotificationRecord],
    snapshot: &ReportSnapshot,
    now: NaiveDate,
) -> Vec<Sheet> {
    log::debug!(
        "Formatting comprehensive report: {} documents, {} notifications",
        documents.len(),
        notifications.len()
    );
    vec![
        format_document_sheet(documents, now),
        format_notification_sheet(notifications),
        format_statistics_sheet(snapshot),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::document::{PartnerTypeRef, RegionRef};
    use crate::domains::notification::{NotificationStatus, RelatedDocumentRef};
    use crate::domains::report::{aggregate, resolve_classified};
    use crate::types::UserRef;
    use uuid::Uuid;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn empty_doc() -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            file_name: "scan.pdf".to_string(),
            description: None,
            file_type: None,
            file_size: None,
            upload_date: None,
            validity_date: None,
            expiry_date: None,
            region_id: None,
            region: None,
            partner_type_id: None,
            partner_type: None,
            uploaded_by: None,
            assigned_user: None,
        }
    }

    fn full_doc() -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            file_name: "partnership-agreement.docx".to_string(),
            description: Some("Signed agreement".to_string()),
            file_type: Some(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    .to_string(),
            ),
            file_size: Some(1536),
            upload_date: Some("2025-05-20T08:15:00Z".to_string()),
            validity_date: Some("2025-05-20".to_string()),
            expiry_date: Some("2025-04-01".to_string()),
            region_id: Some(Uuid::new_v4()),
            region: Some(RegionRef { name: "North".to_string(), code: Some("N".to_string()) }),
            partner_type_id: Some(Uuid::new_v4()),
            partner_type: Some(PartnerTypeRef { name: "NGO".to_string() }),
            uploaded_by: Some(UserRef { name: "Amina Yusuf".to_string(), role: Some("admin".to_string()) }),
            assigned_user: Some(UserRef::new("Jonas Petersen")),
        }
    }

    fn notification() -> NotificationRecord {
        NotificationRecord {
            id: Uuid::new_v4(),
            title: "Expiry warning".to_string(),
            message: "partnership-agreement.docx expires in 10 days".to_string(),
            notification_type: Some("EXPIRY_WARNING".to_string()),
            status: NotificationStatus::Sent,
            scheduled_time: Some("2025-06-10T08:00:00Z".to_string()),
            sent_time: None,
            target_user: None,
            related_document: Some(RelatedDocumentRef {
                id: Uuid::new_v4(),
                file_name: Some("partnership-agreement.docx".to_string()),
            }),
            days_until_expiry: Some(10),
        }
    }

    #[test]
    fn test_empty_document_sheet() {
        let sheet = format_document_sheet(&[], day(2025, 6, 15));
        assert_eq!(sheet.name, FILES_SHEET_NAME);
        assert_eq!(sheet.headers.len(), 11);
        assert!(sheet.rows.is_empty());
    }

    #[test]
    fn test_document_row_never_has_blank_cells() {
        let sheet = format_document_sheet(&[empty_doc(), full_doc()], day(2025, 6, 15));
        for row in &sheet.rows {
            assert_eq!(row.len(), sheet.headers.len());
            for cell in row {
                assert!(!cell.trim().is_empty(), "blank cell in {:?}", row);
            }
        }
    }

    #[test]
    fn test_document_row_placeholders() {
        let sheet = format_document_sheet(&[empty_doc()], day(2025, 6, 15));
        let row = &sheet.rows[0];
        assert_eq!(row[0], "scan.pdf");
        assert_eq!(row[1], "Unknown");
        assert_eq!(row[2], "0 Bytes");
        assert_eq!(row[3], "N/A"); // upload date
        assert_eq!(row[4], "N/A"); // expiry date
        assert_eq!(row[5], "N/A"); // uploaded by
        assert_eq!(row[6], "Not Assigned");
        assert_eq!(row[7], "N/A"); // region
        assert_eq!(row[8], "N/A"); // partner type
        assert_eq!(row[9], "Active"); // no expiry date -> not past expiry
        assert_eq!(row[10], "N/A"); // description
    }

    #[test]
    fn test_document_row_values() {
        let sheet = format_document_sheet(&[full_doc()], day(2025, 6, 15));
        let row = &sheet.rows[0];
        assert_eq!(row[0], "partnership-agreement.docx");
        assert_eq!(row[1], "DOCX");
        assert_eq!(row[2], "1.50 KB");
        assert_eq!(row[3], "2025-05-20");
        assert_eq!(row[4], "2025-04-01");
        assert_eq!(row[5], "Amina Yusuf");
        assert_eq!(row[6], "Jonas Petersen");
        assert_eq!(row[7], "North");
        assert_eq!(row[8], "NGO");
        assert_eq!(row[9], "Expired");
        assert_eq!(row[10], "Signed agreement");
    }

    #[test]
    fn test_notification_sheet() {
        let sheet = format_notification_sheet(&[notification()]);
        assert_eq!(sheet.name, NOTIFICATIONS_SHEET_NAME);
        let row = &sheet.rows[0];
        assert_eq!(row.len(), sheet.headers.len());
        assert_eq!(row[3], "SENT");
        assert_eq!(row[5], "N/A"); // sent time
        assert_eq!(row[6], "N/A"); // target user
        assert_eq!(row[7], "partnership-agreement.docx");
        assert_eq!(row[8], "10");
    }

    #[test]
    fn test_statistics_sheet_single_row() {
        let documents = vec![full_doc(), empty_doc()];
        let now = day(2025, 6, 15);
        let classified = resolve_classified(&documents, None, None, now, 30);
        let snapshot = aggregate(&documents, &[notification()], &classified);

        let sheet = format_statistics_sheet(&snapshot);
        assert_eq!(sheet.name, STATISTICS_SHEET_NAME);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0], vec!["2", "1", "0", "1", "1", "0"]);
    }

    #[test]
    fn test_comprehensive_report_order() {
        let documents = vec![full_doc()];
        let notifications = vec![notification()];
        let now = day(2025, 6, 15);
        let classified = resolve_classified(&documents, None, None, now, 30);
        let snapshot = aggregate(&documents, &notifications, &classified);

        let sheets = format_comprehensive_report(&documents, &notifications, &snapshot, now);
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![FILES_SHEET_NAME, NOTIFICATIONS_SHEET_NAME, STATISTICS_SHEET_NAME]);
    }
}
