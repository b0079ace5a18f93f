//! Polarity Core
//!
//! Core types and error handling shared across Polarity components.
//!
//! This crate provides:
//! - The `SentimentVector` intermediate representation and its `Polarity`
//! - The error taxonomy raised while building engines and checking capabilities

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Polarity, SentimentVector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Polarity, SentimentVector};
}
