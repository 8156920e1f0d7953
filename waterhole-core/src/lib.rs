pub mod error;
pub mod input;
pub mod output;
pub mod probe;
pub mod summary;

pub use error::CoreError;
pub use input::load_list;
pub use output::{write_errors, write_report, write_results};
pub use probe::{ProbeOptions, execute_probe};
pub use summary::generate_probe_summary;
