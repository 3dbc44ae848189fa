//! HTTP Server for the Userstore Service
//!
//! This module provides the HTTP server implementation for the userstore
//! service using hyper for HTTP/1.1 server functionality. The server
//! accepts JSON-RPC requests over HTTP POST and forwards them to the
//! [`ServiceRouter`] for processing.
//!
//! # Architecture
//!
//! The HTTP server:
//! - Listens on a TCP socket for incoming HTTP connections
//! - Spawns a tokio task for each connection
//! - Parses JSON-RPC requests from HTTP bodies
//! - Forwards requests to the ServiceRouter for handling
//! - Returns JSON-RPC responses as HTTP responses
//!
//! The default deployment binds port 50051 and serves plaintext HTTP;
//! there is no TLS layer.
//!
//! # Example
//!
//! ```no_run
//! use userstore_server::{HttpServer, UserStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(UserStore::seeded());
//!     let server = HttpServer::new(store);
//!     server.run("0.0.0.0:50051".parse().unwrap()).await.unwrap();
//! }
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::BodyExt;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde_json::Value;
use tokio::net::TcpListener;

use crate::http_router::ServiceRouter;
use crate::store::UserStore;
use userstore_common::protocol::error::{Result, UserStoreError};
use userstore_common::protocol::JsonRpcError;
use userstore_common::transport::{HttpTransport, HyperRequest, HyperResponse};

/// Largest accepted request body. Anything bigger is refused with a
/// -32001 error before it reaches the router.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// HTTP server for the userstore service.
///
/// The server listens for HTTP requests and processes JSON-RPC requests
/// through the [`ServiceRouter`].
pub struct HttpServer {
    /// The router for handling JSON-RPC requests
    router: Arc<ServiceRouter>,
}

impl HttpServer {
    /// Creates a new HTTP server over the given store instance.
    pub fn new(store: Arc<UserStore>) -> Self {
        let router = Arc::new(ServiceRouter::new(store));
        Self { router }
    }

    /// Binds the given address and serves until the process exits.
    ///
    /// # Arguments
    ///
    /// * `addr` - The socket address to bind to
    pub async fn run(self, addr: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| UserStoreError::Transport(format!("Failed to bind to {}: {}", addr, e)))?;

        tracing::info!(
            "HTTP server listening on {}",
            listener
                .local_addr()
                .map_err(|e| UserStoreError::Transport(format!(
                    "Failed to get local address: {}",
                    e
                )))?
        );

        self.serve(listener).await
    }

    /// Serves connections from an already-bound listener.
    ///
    /// Split out of [`run`](Self::run) so tests can bind port 0 and learn
    /// the actual address before the accept loop starts. Each accepted
    /// connection gets its own tokio task.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        loop {
            let (stream, _) = listener.accept().await.map_err(|e| {
                UserStoreError::Transport(format!("Failed to accept connection: {}", e))
            })?;

            let io = TokioIo::new(stream);
            let router = self.router.clone();

            tokio::task::spawn(async move {
                let service = service_fn(move |req| {
                    let router = router.clone();
                    async move { Self::handle_request(router, req).await }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    tracing::error!("Error serving connection: {}", err);
                }
            });
        }
    }

    /// Handles one HTTP request.
    ///
    /// Envelope-layer failures (non-POST, oversized body, invalid JSON)
    /// are answered here; everything else is the router's job.
    async fn handle_request(
        router: Arc<ServiceRouter>,
        req: HyperRequest,
    ) -> std::result::Result<HyperResponse, UserStoreError> {
        // Only accept POST requests
        if req.method() != hyper::Method::POST {
            return Ok(HttpTransport::to_http_error(
                Value::Null,
                JsonRpcError::invalid_request(),
            ));
        }

        // Read the request body
        let body = req
            .into_body()
            .collect()
            .await
            .map_err(|e| UserStoreError::Transport(format!("Failed to read request body: {}", e)))?
            .to_bytes();

        if body.len() > MAX_BODY_BYTES {
            return Ok(HttpTransport::to_http_error(
                Value::Null,
                JsonRpcError::request_too_large(MAX_BODY_BYTES),
            ));
        }

        // Parse the JSON-RPC request
        let jsonrpc_req = match HttpTransport::parse_jsonrpc(body) {
            Ok(req) => req,
            Err(e) => {
                tracing::error!("Failed to parse JSON-RPC request: {}", e);
                return Ok(HttpTransport::to_http_error(
                    Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        let jsonrpc_res = router.handle_request(jsonrpc_req).await;
        Ok(HttpTransport::to_http_response(jsonrpc_res))
    }
}
