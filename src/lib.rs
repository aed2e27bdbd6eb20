//! Document reporting and classification engine.
//!
//! Takes an in-memory snapshot of document and notification records and
//! derives the statistics, lifecycle classifications, and tabular export
//! sheets the hosting application displays. The engine is synchronous and
//! stateless: every call receives complete inputs and returns a complete,
//! recomputed result. Fetching the snapshots, persisting anything, and
//! serializing export sheets to actual files are all caller concerns.

// Public modules
pub mod domains;
pub mod errors;
pub mod types;
pub mod validation;
