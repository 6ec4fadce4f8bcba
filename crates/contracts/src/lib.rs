//! Wire contracts between the security console frontend and the analysis backend.
//!
//! Every request/response body the frontend exchanges with `/api/*` lives here,
//! together with the small pure helpers that interpret them.

pub mod analysis;
pub mod chat;
pub mod config;
pub mod shared;
pub mod system;
pub mod translation;
