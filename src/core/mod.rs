//! Configuration and the request/response payloads of the public API

pub mod config;
pub mod models;
