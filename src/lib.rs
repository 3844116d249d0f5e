//! Formula Editor - symbolic expression editing with external verification
//!
//! This crate provides the core types and logic for editing formal
//! expressions: a token insertion grammar, asynchronous verification with
//! staleness filtering, validity status resolution and template
//! instantiation, wired together with the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod grammar;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod status;
pub mod template;
pub mod tracing;
pub mod update;
pub mod verification;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use status::ValidityStatus;
