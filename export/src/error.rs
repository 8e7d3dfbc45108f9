//! Errors of the export run.
//!
//! Every variant renders as the single line `start-residents` prints before
//! exiting. API failures render as the bare remote message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use wzs_core::ApiError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot start {program}: {source}")]
    ViewerLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_print_the_remote_message_only() {
        let err = ExportError::from(ApiError::Server {
            status: 500,
            message: "Database unavailable".to_string(),
        });
        assert_eq!(err.to_string(), "Database unavailable");
    }

    #[test]
    fn io_errors_name_the_path() {
        let err = ExportError::io(
            "/data/residents.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        assert_eq!(err.to_string(), "/data/residents.csv: access denied");
    }
}
