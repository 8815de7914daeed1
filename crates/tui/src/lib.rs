//! Terminal salary form: collects time/rate inputs, computes pay through the
//! engine, persists entries to the remote store and exports the running
//! table as a PDF or CSV statement.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod ui;
