//! Bridge between the UI thread and the tokio worker that performs requests.

pub mod commands;
pub mod runtime;
