use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Request;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde_json::{json, Value};

use userstore_common::protocol::error::{Result, UserStoreError};
use userstore_common::protocol::jsonrpc::USER_NOT_FOUND;
use userstore_common::protocol::{JsonRpcResponse, User, UserList};
use userstore_common::transport::HttpTransport;

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Userstore client for making RPC calls.
///
/// Each call builds a fresh HTTP request against the server URL; there is
/// no connection state to share, so the client is cheap to clone.
#[derive(Clone)]
pub struct UserStoreClient {
    server_url: String,
}

impl UserStoreClient {
    /// Create a new client for a server URL such as
    /// `http://127.0.0.1:50051/`.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
        }
    }

    /// Call an RPC method and return the raw result value.
    ///
    /// JSON-RPC errors become typed failures: the user-not-found
    /// application code maps to [`UserStoreError::NotFound`], anything
    /// else to [`UserStoreError::RpcFailure`].
    pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let request_id = REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
        let jsonrpc_req = HttpTransport::build_request(method, params, json!(request_id));

        let body = serde_json::to_vec(&jsonrpc_req)?;
        let http_request = Request::builder()
            .method("POST")
            .uri(&self.server_url)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| UserStoreError::Transport(format!("Failed to build request: {}", e)))?;

        let client = Client::builder(TokioExecutor::new()).build_http();

        let timeout = Duration::from_secs(30);
        let response = tokio::time::timeout(timeout, client.request(http_request))
            .await
            .map_err(|_| {
                UserStoreError::Transport(format!("Request timed out after {:?}", timeout))
            })?
            .map_err(|e| UserStoreError::Transport(format!("HTTP request failed: {}", e)))?;

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| UserStoreError::Transport(format!("Failed to read response: {}", e)))?
            .to_bytes();

        let jsonrpc_response: JsonRpcResponse = serde_json::from_slice(&body_bytes)?;

        if let Some(error) = jsonrpc_response.error {
            return Err(match error.code {
                USER_NOT_FOUND => UserStoreError::NotFound(error.message),
                _ => UserStoreError::RpcFailure(error.message),
            });
        }

        jsonrpc_response
            .result
            .ok_or_else(|| UserStoreError::InvalidResponse("Missing result".to_string()))
    }

    /// Fetch all users in insertion order.
    pub async fn get_users(&self) -> Result<Vec<User>> {
        let value = self.call("GetUsers", json!({})).await?;
        let list: UserList = serde_json::from_value(value)?;
        Ok(list.users)
    }

    /// Create a user. Pass an empty `status` to get the server default.
    pub async fn add_user(&self, name: &str, email: &str, status: &str) -> Result<User> {
        let value = self
            .call(
                "AddUser",
                json!({"name": name, "email": email, "status": status}),
            )
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Update a user. Empty fields are left unchanged by the server.
    pub async fn update_user(
        &self,
        id: &str,
        name: &str,
        email: &str,
        status: &str,
    ) -> Result<User> {
        let value = self
            .call(
                "UpdateUser",
                json!({"id": id, "name": name, "email": email, "status": status}),
            )
            .await
            .map_err(|e| rebind_not_found(e, id))?;
        Ok(serde_json::from_value(value)?)
    }

    /// Delete a user by id.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.call("DeleteUser", json!({"id": id}))
            .await
            .map_err(|e| rebind_not_found(e, id))?;
        Ok(())
    }
}

/// The wire error carries only the contract's fixed detail message; the
/// typed methods know which id they asked for, so restore it.
fn rebind_not_found(err: UserStoreError, id: &str) -> UserStoreError {
    match err {
        UserStoreError::NotFound(_) => UserStoreError::NotFound(id.to_string()),
        e => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = UserStoreClient::new("http://localhost:50051/");
        assert_eq!(client.server_url, "http://localhost:50051/");
    }

    #[test]
    fn test_client_is_clonable() {
        let client = UserStoreClient::new("http://localhost:50051/");
        let client2 = client.clone();
        assert_eq!(client.server_url, client2.server_url);
    }

    #[test]
    fn test_rebind_not_found() {
        let err = rebind_not_found(UserStoreError::NotFound("User not found".into()), "7");
        assert!(matches!(err, UserStoreError::NotFound(ref id) if id == "7"));

        let err = rebind_not_found(UserStoreError::RpcFailure("boom".into()), "7");
        assert!(matches!(err, UserStoreError::RpcFailure(_)));
    }
}
