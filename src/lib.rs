//! HTTP backend for the 너나들이 service: LLM image processing and nearby
//! facility lookup over a local SQLite table.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
