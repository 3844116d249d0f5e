//! Runtime module - command execution
//!
//! - `app` - owns the model, runs checker calls on worker threads and feeds
//!   their results back through `update`

pub mod app;

pub use app::Runtime;
