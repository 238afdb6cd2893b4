//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, ready for display)
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `convert.rs`: `TryFrom`/`From` conversions with validation
//! - `client.rs`: Sub-client with HTTP methods

pub mod auction;
pub mod datapoint;
pub mod item;
pub mod server_realm;

use thiserror::Error;

/// A decoded payload that violates the data model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("item {item_id} has quality {value}, expected 0-7")]
    InvalidQuality { item_id: u64, value: u8 },

    #[error("auction for item {item_id} has zero quantity")]
    ZeroQuantity { item_id: u64 },

    #[error("hourly summary timestamps not strictly increasing at row {index}")]
    UnorderedTimestamps { index: usize },
}

impl From<ValidationError> for crate::error::SdkError {
    fn from(e: ValidationError) -> Self {
        crate::error::SdkError::Validation(e.to_string())
    }
}
