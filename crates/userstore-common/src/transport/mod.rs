//! Userstore Transport Layer
//!
//! HTTP helpers for moving JSON-RPC messages between the userstore server
//! and its clients.
//!
//! # Architecture
//!
//! The service speaks JSON-RPC 2.0 over HTTP/1.1 POST. This module
//! provides the conversions between raw HTTP bodies and the envelope
//! types in [`crate::protocol`]:
//!
//! - **[`HttpTransport`]**: parse request bodies, build HTTP responses
//! - **[`HyperRequest`]** / **[`HyperResponse`]**: type aliases for the
//!   hyper request/response shapes used throughout

pub mod http;

pub use http::{HttpTransport, HyperRequest, HyperResponse};
