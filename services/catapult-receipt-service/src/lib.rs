//! Catapult Receipt Service Library
//!
//! This library wires the fetch layer to statement decoding, alias resolution
//! and receipt inclusion proofs.

pub mod config;
pub mod error;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use repository::{InMemoryReceiptRepository, ReceiptRepository};
pub use service::ReceiptService;
