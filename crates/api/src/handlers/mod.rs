pub mod auth;
pub mod client_portal;
pub mod client_projects;
pub mod clients;
pub mod currencies;
pub mod health;
