//! Keyword-driven portfolio chat: a shared classifier and template renderer
//! behind an HTTP API and a terminal client.

pub mod chat;
pub mod config;
pub mod errors;
pub mod knowledge;
pub mod routes;
pub mod state;
