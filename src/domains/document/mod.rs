pub mod types;

pub use types::{DocumentRecord, PartnerTypeRef, RegionRef};
