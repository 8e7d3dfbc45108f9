use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::ExportError;

/// Starts the program that shows the exported file.
pub trait ViewerLauncher {
    fn launch(&self, program: &str, file: &Path) -> Result<(), ExportError>;
}

impl<L: ViewerLauncher + ?Sized> ViewerLauncher for &L {
    fn launch(&self, program: &str, file: &Path) -> Result<(), ExportError> {
        (**self).launch(program, file)
    }
}

/// Spawns `program file` and returns without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandLauncher;

impl ViewerLauncher for CommandLauncher {
    fn launch(&self, program: &str, file: &Path) -> Result<(), ExportError> {
        let child = Command::new(program)
            .arg(file)
            .spawn()
            .map_err(|source| ExportError::ViewerLaunch {
                program: program.to_string(),
                source,
            })?;
        debug!(program, pid = child.id(), "viewer started");
        Ok(())
    }
}
