//! # API gRPC
//!
//! gRPC server implementation for the McDonald criteria classifier.
//!
//! Handles:
//! - gRPC service setup and authentication
//! - Service implementations delegating to `mcdonald-core`
//! - gRPC-specific concerns (interceptors, status mapping)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

pub use service::{auth_interceptor, pb, McdonaldService};

pub mod service;
