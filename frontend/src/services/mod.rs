//! Backend communication services.
//!
//! # Services
//!
//! - [`convert`] - document upload to the conversion endpoint
//! - [`download`] - binary fetch of converted artifacts and client-side save

pub mod convert;
pub mod download;

pub use convert::*;
pub use download::*;
