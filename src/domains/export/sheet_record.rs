use crate::domains::document::DocumentRecord;
use crate::domains::notification::NotificationRecord;
use crate::domains::report::classifier::{classify, ExpiryStatus, DEFAULT_HORIZON_DAYS};
use crate::domains::report::dates::parse_calendar_date;
use crate::domains::report::types::ReportSnapshot;
use crate::types::UserRef;
use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder for cells whose source field is missing. Spreadsheet tools
/// render truly blank cells inconsistently, so no output cell is ever empty.
pub const NA: &str = "N/A";

/// Strip characters that spreadsheet tools mishandle.
pub fn sanitize_cell(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\u{2028}' | '\u{2029}' => None, // Remove line/paragraph separators
            '\u{00A0}' => Some(' '),         // Replace non-breaking space
            c => Some(c),
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trait for types that project into one export sheet row
pub trait SheetRecord: Serialize {
    /// Column headers for this type
    fn headers() -> Vec<&'static str>;

    /// Convert to one row of cells
    fn to_row(&self) -> Vec<String>;
}

/// Cell with the standard `N/A` placeholder for missing values.
pub fn cell_or_na<T: std::fmt::Display>(value: &Option<T>) -> String {
    cell_or(value, NA)
}

/// Cell with an explicit placeholder for missing or blank values.
pub fn cell_or<T: std::fmt::Display>(value: &Option<T>, placeholder: &str) -> String {
    match value {
        Some(v) => {
            let cell = sanitize_cell(&v.to_string());
            if cell.is_empty() {
                placeholder.to_string()
            } else {
                cell
            }
        }
        None => placeholder.to_string(),
    }
}

/// Date cell: `YYYY-MM-DD` when the raw feed value parses, `N/A` otherwise.
pub fn date_cell(raw: &Option<String>) -> String {
    raw.as_deref()
        .and_then(parse_calendar_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NA.to_string())
}

fn user_cell(user: &Option<UserRef>, placeholder: &str) -> String {
    user.as_ref()
        .and_then(|u| u.display_name())
        .map(sanitize_cell)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Human-readable size: largest unit of Bytes/KB/MB/GB keeping the displayed
/// magnitude in `[1, 1024)`, two decimals. Zero, missing, negative, or
/// otherwise malformed byte counts all format as `"0 Bytes"` so a bad record
/// can never fail an export.
pub fn format_file_size(bytes: Option<i64>) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    let bytes = bytes.unwrap_or(0);
    if bytes <= 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} Bytes", bytes)
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

/// Short display label derived from a MIME type string, e.g.
/// `application/pdf` -> `PDF`. Unknown or unparsable types label as
/// `Unknown`.
pub fn short_type_label(file_type: Option<&str>) -> String {
    let raw = match file_type.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return "Unknown".to_string(),
    };
    let parsed: mime::Mime = match raw.parse() {
        Ok(m) => m,
        Err(_) => return "Unknown".to_string(),
    };

    match parsed.essence_str() {
        "application/pdf" => "PDF".to_string(),
        "application/msword" => "DOC".to_string(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
            "DOCX".to_string()
        }
        "application/vnd.ms-excel" => "XLS".to_string(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "XLSX".to_string(),
        "application/vnd.ms-powerpoint" => "PPT".to_string(),
        "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
            "PPTX".to_string()
        }
        "text/plain" => "TXT".to_string(),
        _ => {
            // Last subtype segment covers the common cases: image/png -> PNG,
            // application/x-tar -> TAR, text/csv -> CSV.
            let subtype = parsed.subtype().as_str();
            subtype
                .rsplit(|c| c == '.' || c == '-')
                .next()
                .unwrap_or(subtype)
                .to_uppercase()
        }
    }
}

/// One document projected against a reference date; the wrapper exists
/// because the status column depends on `now`, which a bare
/// [`DocumentRecord`] does not carry.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSheetRow<'a> {
    pub doc: &'a DocumentRecord,
    pub now: NaiveDate,
}

impl SheetRecord for DocumentSheetRow<'_> {
    fn headers() -> Vec<&'static str> {
        vec![
            "File Name",
            "Type",
            "Size",
            "Upload Date",
            "Expiry Date",
            "Uploaded By",
            "Assigned To",
            "Region",
            "Partner Type",
            "Status",
            "Description",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        let status = if classify(self.doc, self.now, DEFAULT_HORIZON_DAYS) == ExpiryStatus::Expired
        {
            "Expired"
        } else {
            "Active"
        };

        vec![
            cell_or(&Some(&self.doc.file_name), "Untitled"),
            short_type_label(self.doc.file_type.as_deref()),
            format_file_size(self.doc.file_size),
            date_cell(&self.doc.upload_date),
            date_cell(&self.doc.expiry_date),
            user_cell(&self.doc.uploaded_by, NA),
            user_cell(&self.doc.assigned_user, "Not Assigned"),
            cell_or_na(&self.doc.region_name()),
            cell_or_na(&self.doc.partner_type_name()),
            status.to_string(),
            cell_or_na(&self.doc.description),
        ]
    }
}

impl SheetRecord for NotificationRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Title",
            "Message",
            "Type",
            "Status",
            "Scheduled Time",
            "Sent Time",
            "Target User",
            "Related Document",
            "Days Until Expiry",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            cell_or(&Some(&self.title), "Untitled"),
            cell_or_na(&Some(&self.message)),
            cell_or_na(&self.notification_type),
            sanitize_cell(self.status.as_str()),
            cell_or_na(&self.scheduled_time),
            cell_or_na(&self.sent_time),
            user_cell(&self.target_user, NA),
            cell_or_na(
                &self
                    .related_document
                    .as_ref()
                    .and_then(|d| d.file_name.as_deref()),
            ),
            cell_or_na(&self.days_until_expiry),
        ]
    }
}

impl SheetRecord for ReportSnapshot {
    fn headers() -> Vec<&'static str> {
        vec![
            "Total Documents",
            "Expired Documents",
            "Expiring Soon",
            "Total Notifications",
            "Sent Notifications",
            "Failed Notifications",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.total_documents.to_string(),
            self.expired_count.to_string(),
            self.expiring_soon_count.to_string(),
            self.total_notifications.to_string(),
            self.sent_count.to_string(),
            self.failed_count.to_string(),
        ]
    }
}
