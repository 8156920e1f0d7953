pub mod error;
pub mod prober;
pub mod result;
pub mod target;

pub use error::ScanError;
pub use prober::{ProbeConfig, Prober, ProgressCallback, classify_error};
pub use result::{ErrorKind, ErrorRow, ProbeOutcome, ProbeReport, ResultRow};
pub use target::{ProbeTarget, build_targets};
