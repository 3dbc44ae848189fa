//! HTTP Router for the Userstore Service
//!
//! This module dispatches JSON-RPC methods to the store operations.
//!
//! # Architecture
//!
//! The router uses a simple approach:
//! - **Contract methods**: `GetUsers`, `AddUser`, `UpdateUser`,
//!   `DeleteUser` map one-to-one onto [`UserStore`] operations
//! - **Built-in methods**: `_info` is handled directly and is not part of
//!   the shared contract
//! - Anything else gets a method-not-found error

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use userstore_common::protocol::error::UserStoreError;
use userstore_common::protocol::{
    Empty, IdRequest, JsonRpcError, JsonRpcRequest, JsonRpcResponse, User, UserList,
};

use crate::store::UserStore;

/// Diagnostic payload returned by the `_info` builtin.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub server_type: String,
    pub version: String,
    pub uptime_ms: u64,
    pub users: usize,
}

/// Router mapping JSON-RPC methods onto the user store.
pub struct ServiceRouter {
    store: Arc<UserStore>,
    started_at: Instant,
}

impl ServiceRouter {
    /// Creates a new router over the given store instance.
    pub fn new(store: Arc<UserStore>) -> Self {
        Self {
            store,
            started_at: Instant::now(),
        }
    }

    /// Handles a JSON-RPC request and produces the response envelope.
    ///
    /// Method and parameter field names are fixed by the shared contract.
    /// `NotFound` from the store becomes the application error code
    /// `-32004` with the contract's detail message; malformed params
    /// become `-32602`; unknown methods become `-32601`.
    pub async fn handle_request(&self, req: JsonRpcRequest) -> JsonRpcResponse {
        let id = req.id.clone();

        match req.method.as_str() {
            "GetUsers" => {
                let users = self.store.get_users().await;
                success(id, &UserList { users })
            }
            "AddUser" => {
                let params: User = match parse_params(req.params) {
                    Ok(p) => p,
                    Err(e) => return JsonRpcResponse::error(id, e),
                };
                let user = self
                    .store
                    .add_user(params.name, params.email, params.status)
                    .await;
                success(id, &user)
            }
            "UpdateUser" => {
                let params: User = match parse_params(req.params) {
                    Ok(p) => p,
                    Err(e) => return JsonRpcResponse::error(id, e),
                };
                match self
                    .store
                    .update_user(&params.id, params.name, params.email, params.status)
                    .await
                {
                    Ok(user) => success(id, &user),
                    Err(e) => JsonRpcResponse::error(id, store_error(e)),
                }
            }
            "DeleteUser" => {
                let params: IdRequest = match parse_params(req.params) {
                    Ok(p) => p,
                    Err(e) => return JsonRpcResponse::error(id, e),
                };
                match self.store.delete_user(&params.id).await {
                    Ok(()) => success(id, &Empty {}),
                    Err(e) => JsonRpcResponse::error(id, store_error(e)),
                }
            }
            "_info" => {
                let info = ServerInfo {
                    server_type: "userstore".into(),
                    version: env!("CARGO_PKG_VERSION").into(),
                    uptime_ms: self.started_at.elapsed().as_millis() as u64,
                    users: self.store.len().await,
                };
                success(id, &info)
            }
            _ => JsonRpcResponse::error(id, JsonRpcError::method_not_found()),
        }
    }
}

/// Decodes method params, treating omitted params as an empty message.
fn parse_params<T: DeserializeOwned + Default>(params: Value) -> Result<T, JsonRpcError> {
    if params.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(params).map_err(|e| JsonRpcError::invalid_params(&e.to_string()))
}

fn success<T: Serialize>(id: Value, value: &T) -> JsonRpcResponse {
    match serde_json::to_value(value) {
        Ok(v) => JsonRpcResponse::success(id, v),
        Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(&e.to_string())),
    }
}

fn store_error(err: UserStoreError) -> JsonRpcError {
    match err {
        UserStoreError::NotFound(_) => JsonRpcError::user_not_found(),
        e => JsonRpcError::internal_error(&e.to_string()),
    }
}
