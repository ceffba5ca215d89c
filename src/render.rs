//! Post-processing collaborator: hands the exported file to a drawing tool.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Downstream consumer of the exported wall file. Injectable so the pipeline
/// can run and be tested without any drawing tool installed.
pub trait Renderer {
    fn render(&self, output: &Path) -> Result<(), String>;
}

/// Launches an external drawing program as a subprocess with no arguments;
/// the program is expected to pick up the exported file itself. Launch
/// failures and non-zero exits are errors for the caller to downgrade to
/// warnings.
#[derive(Clone, Debug)]
pub struct CommandRenderer {
    program: PathBuf,
}

impl CommandRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Renderer for CommandRenderer {
    fn render(&self, _output: &Path) -> Result<(), String> {
        let status = Command::new(&self.program)
            .status()
            .map_err(|e| format!("Failed to launch {}: {e}", self.program.display()))?;
        if !status.success() {
            return Err(format!(
                "{} exited with {}",
                self.program.display(),
                status
            ));
        }
        Ok(())
    }
}
