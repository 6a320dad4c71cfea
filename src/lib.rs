//! MCP stdio server exposing the Custom Vision Training API as tools.
//!
//! Every tool is a row in [`registry`]; one generic engine in
//! [`managers::training`] binds arguments, sends the HTTP request and renders
//! the response for all of them.

pub mod app;
pub mod constants;
pub mod errors;
pub mod managers;
pub mod mcp;
pub mod models;
pub mod registry;
pub mod services;
pub mod utils;
