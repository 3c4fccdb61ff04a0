//! DelegateAI dashboard: view router, meeting detail presenter and counter
//! animation behind a terminal UI.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod modules;
pub mod ui;
