//! dummydash - a terminal admin dashboard for the DummyJSON API.
//!
//! This library exposes modules for use in integration tests.

pub mod api;
pub mod app;
pub mod models;
pub mod state;
pub mod ui;
