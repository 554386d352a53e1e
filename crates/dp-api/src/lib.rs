//! Library crate for the natural-language API server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `dp-e2e-tests`) can access `AppState`, `build_router`, and the
//! `IntentResolver` implementations.

pub mod config;
pub mod error;
pub mod inference;
pub mod routes;
pub mod state;
