pub mod aggregator;
pub mod classifier;
pub mod dates;
pub mod service;
pub mod sources;
pub mod types;

pub use aggregator::aggregate;
pub use classifier::{classify, ExpiryStatus, DEFAULT_HORIZON_DAYS};
pub use service::ReportService;
pub use sources::resolve_classified;
pub use types::{ClassifiedDocuments, MonthlyUploadCount, ReportSnapshot};
