//! Userstore Client
//!
//! Typed client for the userstore RPC service. Wraps the JSON-RPC over
//! HTTP envelope and exposes the four contract operations as plain async
//! methods returning protocol types.

pub mod client;

pub use client::UserStoreClient;
