//! Core domain types for the outreach console client
//!
//! This crate contains the entity shapes exchanged with the gateway and the
//! page model shared across all list screens.

mod activity;
mod auth;
mod campaign;
mod env_config;
mod page;
mod step;
mod theme;
mod user;

pub use activity::*;
pub use auth::*;
pub use campaign::*;
pub use env_config::*;
pub use page::*;
pub use step::*;
pub use theme::*;
pub use user::*;
