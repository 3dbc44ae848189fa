//! Userstore Server
//!
//! This crate provides the user-management service: an in-memory,
//! insertion-ordered collection of user records behind a JSON-RPC over
//! HTTP surface with four methods (`GetUsers`, `AddUser`, `UpdateUser`,
//! `DeleteUser`).

pub mod http_router;
pub mod http_server;
pub mod store;

pub use http_router::ServiceRouter;
pub use http_server::HttpServer;
pub use store::UserStore;
