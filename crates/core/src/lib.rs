//! Domain primitives shared by the db and api crates.
//!
//! - [`error`] -- the `CoreError` taxonomy all layers map into.
//! - [`types`] -- id and timestamp aliases.
//! - [`domains`] -- identity-domain constants (admin vs. client).
//! - [`projects`] -- project field validation and clamping.
//! - [`storage`] -- filesystem-backed attachment store.
//! - [`currency`] -- fixed-rate currency conversion and display.

pub mod currency;
pub mod domains;
pub mod error;
pub mod projects;
pub mod storage;
pub mod types;
