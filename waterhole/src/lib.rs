pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{RunSettings, expand_path, run_probe};
