//! Terminal vocabulary flashcards: load a `word - definition` dictionary,
//! drill a sampled subset one word at a time, and keep an append-only log of
//! self-judged answers.
//!
//! The binary in `main.rs` is a thin wrapper over [`app::App`]; the library
//! target also serves the integration tests and benchmarks.

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod external;
pub mod session;
pub mod store;
pub mod ui;
pub mod words;
