use crate::error::AsdfError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Token in the terminal command line that is replaced by the target directory.
pub const DIR_PLACEHOLDER: &str = "{dir}";

/// External processes the tool hands work to.
pub trait Launcher {
    /// Start a new terminal session rooted at `dir`. Returns once the
    /// launcher process has exited, not when the terminal window closes.
    fn open_terminal(&self, dir: &Path) -> anyhow::Result<()>;

    /// Open `file` in an editor and block until the editor exits.
    fn edit(&self, file: &Path) -> anyhow::Result<()>;
}

/// Spawns real processes from whitespace-separated command lines.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    pub terminal: String,
    pub editor: String,
}

impl Launcher for SystemLauncher {
    fn open_terminal(&self, dir: &Path) -> anyhow::Result<()> {
        let argv = terminal_argv(&self.terminal, dir);
        let (program, args) = argv.split_first().ok_or(AsdfError::TerminalFailed)?;
        tracing::info!(program = %program, dir = %dir.display(), "launching terminal");
        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .status()
            .map_err(|e| {
                tracing::warn!(error = %e, program = %program, "terminal spawn failed");
                AsdfError::TerminalFailed
            })?;
        if !status.success() {
            tracing::warn!(%status, program = %program, "terminal exited unsuccessfully");
            return Err(AsdfError::TerminalFailed.into());
        }
        Ok(())
    }

    fn edit(&self, file: &Path) -> anyhow::Result<()> {
        let mut parts = self.editor.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| AsdfError::EditorFailed("command is empty".to_string()))?;
        tracing::info!(program = %program, file = %file.display(), "launching editor");
        let status = Command::new(program)
            .args(parts)
            .arg(file)
            .status()
            .map_err(|e| AsdfError::EditorFailed(format!("{} could not start: {}", program, e)))?;
        if !status.success() {
            return Err(AsdfError::EditorFailed(format!("exited with {}", status)).into());
        }
        Ok(())
    }
}

fn terminal_argv(command: &str, dir: &Path) -> Vec<String> {
    let dir = dir.to_string_lossy();
    command
        .split_whitespace()
        .map(|part| part.replace(DIR_PLACEHOLDER, &dir))
        .collect()
}
