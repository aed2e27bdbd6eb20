pub mod types;

pub use types::{NotificationRecord, NotificationStatus, RelatedDocumentRef};
