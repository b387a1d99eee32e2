pub mod api;
pub mod assistant;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod storage;

pub use context::AppContext;
