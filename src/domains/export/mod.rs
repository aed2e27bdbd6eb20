pub mod service;
pub mod sheet_record;

pub use service::{
    format_comprehensive_report, format_document_sheet, format_notification_sheet,
    format_statistics_sheet, Sheet,
};
pub use sheet_record::{format_file_size, short_type_label, SheetRecord};
