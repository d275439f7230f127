//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the authentication strategies understood by the client.
//! - Define connection settings and the combined `Config`.
//!
//! Does NOT handle:
//! - Loading from the environment or `.env` files (see `loader` module).
//! - Performing the login exchange (see the client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` so they never reach logs.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
