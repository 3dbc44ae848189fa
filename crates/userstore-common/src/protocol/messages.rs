//! Wire Messages
//!
//! The message shapes of the user-management contract. Field names are
//! owned by the shared interface description and are reproduced exactly;
//! renaming any of them breaks interop with the other implementations of
//! this service.
//!
//! All request messages deserialize with `#[serde(default)]` so omitted
//! fields decode to empty values, matching the contract's treatment of
//! unset fields ("" for strings, 0 for the timestamp).

use serde::{Deserialize, Serialize};

/// A user record.
///
/// Also doubles as the parameter shape of `AddUser` (only `name`, `email`,
/// `status` are read) and `UpdateUser` (`id` selects the target record).
/// `id` and `created_at` are always server-assigned; values supplied by a
/// caller on creation are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Free-form status ("active" by default)
    pub status: String,
    /// Creation time in milliseconds since the Unix epoch, immutable
    pub created_at: i64,
}

/// Result of `GetUsers`: the full collection in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserList {
    pub users: Vec<User>,
}

/// Parameter shape of `DeleteUser`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IdRequest {
    pub id: String,
}

/// Empty acknowledgement, returned by `DeleteUser`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empty {}
