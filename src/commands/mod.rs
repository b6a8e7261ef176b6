//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and performs the operation.

pub mod browse;
pub mod config;
pub mod search;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use config::execute as config;
pub use search::execute as search;
