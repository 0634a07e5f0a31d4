//! Bridge between the UI thread and the async HTTP worker.

pub mod commands;
pub mod runtime;
