//! UI Components for the WTOP application.
//!
//! # Layout Components
//! - [`HeaderBar`] - fixed brand bar, purely presentational
//!
//! # Feature Components
//! - [`UploadPanel`] - document upload with drag & drop, result list and
//!   per-result download

mod header;
mod upload;

pub use header::*;
pub use upload::*;
