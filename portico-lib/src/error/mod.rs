//! Error types

mod auth;
mod storage;

pub use auth::*;
pub use storage::*;
