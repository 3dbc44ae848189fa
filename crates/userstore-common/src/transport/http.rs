//! HTTP Transport Utilities
//!
//! This module provides HTTP-specific utilities for the JSON-RPC protocol.
//!
//! # Components
//!
//! - **[`HttpTransport`]**: Utility functions for HTTP/JSON-RPC conversion
//! - **[`HyperRequest`]**: Type alias for hyper incoming requests
//! - **[`HyperResponse`]**: Type alias for hyper responses
//!
//! # Example
//!
//! ```
//! use userstore_common::transport::http::HttpTransport;
//! use userstore_common::protocol::JsonRpcResponse;
//! use serde_json::json;
//!
//! // Build a JSON-RPC request
//! let request = HttpTransport::build_request("GetUsers", json!({}), json!(1));
//!
//! // Convert a JSON-RPC response to HTTP
//! let response = JsonRpcResponse::success(json!(1), json!({"users": []}));
//! let http_response = HttpTransport::to_http_response(response);
//! ```

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response, StatusCode};

use crate::protocol::error::UserStoreError;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Type alias for hyper incoming requests
pub type HyperRequest = Request<Incoming>;

/// Type alias for hyper responses with full body
pub type HyperResponse = Response<Full<Bytes>>;

/// HTTP transport utility functions
///
/// Provides conversion between HTTP and JSON-RPC protocol messages.
pub struct HttpTransport;

impl HttpTransport {
    /// Parse a JSON-RPC request from an HTTP body
    ///
    /// # Arguments
    ///
    /// * `body` - Raw HTTP body bytes
    ///
    /// # Returns
    ///
    /// A parsed `JsonRpcRequest` or a `UserStoreError` if parsing fails
    ///
    /// # Example
    ///
    /// ```
    /// use userstore_common::transport::http::HttpTransport;
    /// use hyper::body::Bytes;
    ///
    /// let body = Bytes::from(r#"{"jsonrpc":"2.0","method":"GetUsers","params":{},"id":1}"#);
    /// let request = HttpTransport::parse_jsonrpc(body).unwrap();
    /// assert_eq!(request.method, "GetUsers");
    /// ```
    pub fn parse_jsonrpc(body: Bytes) -> Result<JsonRpcRequest, UserStoreError> {
        serde_json::from_slice(&body).map_err(UserStoreError::JsonSerialization)
    }

    /// Create an HTTP response from a JSON-RPC response
    ///
    /// JSON-RPC carries its own error signaling, so the HTTP status is
    /// always 200 and callers inspect the envelope's `error` field.
    ///
    /// # Arguments
    ///
    /// * `jsonrpc` - JSON-RPC response object
    ///
    /// # Returns
    ///
    /// A hyper HTTP response with appropriate headers
    pub fn to_http_response(jsonrpc: JsonRpcResponse) -> HyperResponse {
        let body = serde_json::to_vec(&jsonrpc).unwrap_or_default();

        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body)))
            .unwrap()
    }

    /// Create an HTTP error response from a JSON-RPC error
    ///
    /// # Arguments
    ///
    /// * `id` - Request identifier
    /// * `error` - JSON-RPC error object
    pub fn to_http_error(id: serde_json::Value, error: JsonRpcError) -> HyperResponse {
        let jsonrpc_response = JsonRpcResponse::error(id, error);
        Self::to_http_response(jsonrpc_response)
    }

    /// Build a JSON-RPC request
    ///
    /// # Arguments
    ///
    /// * `method` - Method name to invoke
    /// * `params` - Method parameters
    /// * `id` - Request identifier
    pub fn build_request(
        method: &str,
        params: serde_json::Value,
        id: serde_json::Value,
    ) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            id,
        }
    }
}
