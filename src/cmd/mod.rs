pub mod build;
pub mod compose;
pub mod config;
pub mod types;
