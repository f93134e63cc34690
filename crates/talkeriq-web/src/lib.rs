//! TalkerIQ Web Interface
//!
//! Server-rendered admin dashboard for managing AI voice agents, phone
//! numbers and their knowledge base.

#![forbid(unsafe_code)]
#![recursion_limit = "256"]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod components;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main functions
pub use error::WebError;
pub use server::{build_app, build_app_with_state};
pub use state::AppState;
