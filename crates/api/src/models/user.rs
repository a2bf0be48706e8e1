//! Legacy user account types.
//!
//! Kept for compatibility with the original site: accounts are created and
//! looked up through the store, but no HTTP route exposes them.

use elite_driving_core::UserId;
use serde::Serialize;

/// A legacy user account.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

/// Input for creating a legacy user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
