//! # cw-server
//!
//! The relay's HTTP face: `POST /copy`, `GET /paste` and the built-in
//! page, composed from the core store, gate and expiry watcher.

pub mod handlers;
pub mod routes;
pub mod server;

pub use server::{run, ServerConfig, ServerState};
