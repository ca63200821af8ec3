//! Identity-domain constants.
//!
//! Admins and clients authenticate against separate credential stores and
//! receive tokens tagged with their domain. A token issued in one domain is
//! never accepted by the other domain's resolver.

pub const DOMAIN_ADMIN: &str = "admin";
pub const DOMAIN_CLIENT: &str = "client";
