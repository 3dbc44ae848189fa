pub mod error;
pub mod jsonrpc;
pub mod messages;


pub use error::{Result, UserStoreError};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use messages::{Empty, IdRequest, User, UserList};
