//! The resident export run: login, fetch active residents, write the CSV
//! file, start the viewer.
//!
//! # Design
//! Each step is a method so it can be driven on its own; `run` chains them
//! and stops at the first error. Nothing is retried and a partially written
//! file is left as is. The viewer is started even when no file was written,
//! in which case it receives the path of a file that may not exist.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wzs_core::types::{GetResidentsParameters, Resident};
use wzs_core::{SessionId, Transport, WzsServiceClient};

use crate::config::AppConfig;
use crate::error::ExportError;
use crate::launcher::ViewerLauncher;
use crate::writer;

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub residents: usize,
    pub file_written: bool,
    pub output: PathBuf,
}

pub struct ResidentExport<T, L> {
    config: AppConfig,
    client: WzsServiceClient<T>,
    launcher: L,
    output: PathBuf,
}

impl<T: Transport, L: ViewerLauncher> ResidentExport<T, L> {
    /// Resolve the output path and create its directory when missing.
    pub fn new(
        config: AppConfig,
        client: WzsServiceClient<T>,
        launcher: L,
    ) -> Result<Self, ExportError> {
        config.validated_delimiter()?;
        if !config.filepath.is_dir() {
            fs::create_dir_all(&config.filepath)
                .map_err(|e| ExportError::io(&config.filepath, e))?;
        }
        let output = config.output_path();
        Ok(Self {
            config,
            client,
            launcher,
            output,
        })
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    pub fn client(&self) -> &WzsServiceClient<T> {
        &self.client
    }

    pub fn login(&self) -> Result<SessionId, ExportError> {
        debug!("login ongoing");
        let info = self.client.login(&self.config.login_params())?;
        debug!(session_id = %info.session_id, "login done");
        Ok(info.session_id)
    }

    /// Active residents, sorted by ascending id. Equal ids keep server order.
    pub fn fetch_residents(&self, session_id: &SessionId) -> Result<Vec<Resident>, ExportError> {
        debug!("get residents ongoing");
        let mut residents = self
            .client
            .get_residents(&GetResidentsParameters::active(session_id.clone()))?;
        residents.sort_by_key(|r| r.id);
        debug!(count = residents.len(), "get residents done");
        Ok(residents)
    }

    /// Write `residents` to the output file. Returns `false` without touching
    /// the file when there is nothing to write.
    pub fn write_residents(&self, residents: &[Resident]) -> Result<bool, ExportError> {
        if residents.is_empty() {
            return Ok(false);
        }
        info!(path = %self.output.display(), "logging residents");
        writer::write_file(&self.output, residents, &self.config.delimiter)?;
        info!("residents logged");
        Ok(true)
    }

    pub fn launch_viewer(&self) -> Result<(), ExportError> {
        self.launcher
            .launch(&self.config.process_full_name, &self.output)
    }

    pub fn run(&self) -> Result<ExportSummary, ExportError> {
        let session_id = self.login()?;
        let residents = self.fetch_residents(&session_id)?;
        let file_written = self.write_residents(&residents)?;
        self.launch_viewer()?;
        Ok(ExportSummary {
            residents: residents.len(),
            file_written,
            output: self.output.clone(),
        })
    }
}
