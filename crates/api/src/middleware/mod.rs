//! Request-level guards.
//!
//! - [`auth`] -- bearer-token extractors resolving admin and client principals.

pub mod auth;
