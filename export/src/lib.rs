//! Export the active residents of a care home to a CSV file and open it.
//!
//! `start-residents` logs in to the WZS.Net service, fetches the active
//! residents, writes them to `{filepath}/{filename}` and starts the configured
//! viewer on that file.

pub mod config;
pub mod error;
pub mod launcher;
pub mod record;
pub mod telemetry;
pub mod workflow;
pub mod writer;

pub use config::{AppConfig, ConfigError};
pub use error::ExportError;
pub use launcher::{CommandLauncher, ViewerLauncher};
pub use record::CsvRecord;
pub use workflow::{ExportSummary, ResidentExport};
