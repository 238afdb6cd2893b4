//! HTTP client layer: `LotkeeperHttp` with opt-in retry policies.

pub mod client;
pub mod retry;

pub use client::LotkeeperHttp;
pub use retry::{RetryConfig, RetryPolicy};
