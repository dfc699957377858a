//! # cadenza-core
//!
//! Core records, value types, and error handling for the cadenza
//! music-store catalog client.

pub mod error;
pub mod types;

pub use error::{DecodeError, Error, ExtractionError, Result};
pub use types::*;
