//! Report rendering.
//!
//! The PDF renderer lives behind the `pdf` feature so frontends that only
//! need the document model do not pull in `printpdf`.

#[cfg(feature = "pdf")]
pub mod pdf;
