pub mod document;
pub mod export;
pub mod notification;
pub mod report;
