//! Userstore Common Types and Transport
//!
//! This crate provides the protocol definitions and HTTP transport helpers
//! shared by the userstore server, client, and CLI.
//!
//! # Overview
//!
//! Userstore is a small user-management RPC service backed by an in-memory
//! collection. This crate contains the pieces every component agrees on:
//!
//! - **Protocol Layer**: wire messages, the JSON-RPC 2.0 envelope, and the
//!   error taxonomy
//! - **Transport Layer**: HTTP body parsing and response construction
//!
//! # Wire Contract
//!
//! The service exposes four unary methods: `GetUsers`, `AddUser`,
//! `UpdateUser`, and `DeleteUser`. Method and field names are fixed by the
//! shared contract and must not change; the envelope is JSON-RPC 2.0 over
//! HTTP/1.1 POST.
//!
//! # Components
//!
//! - [`protocol`] - Wire messages, JSON-RPC envelope, errors
//! - [`transport`] - HTTP transport helpers
//!
//! # Example
//!
//! ```
//! use userstore_common::{JsonRpcRequest, JsonRpcResponse};
//! use serde_json::json;
//!
//! let request = JsonRpcRequest {
//!     jsonrpc: "2.0".into(),
//!     method: "GetUsers".into(),
//!     params: json!({}),
//!     id: json!(1),
//! };
//!
//! let response = JsonRpcResponse::success(request.id, json!({"users": []}));
//! ```

pub mod protocol;
pub mod transport;

pub use protocol::*;
