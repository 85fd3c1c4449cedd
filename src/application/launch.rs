//! Startup hand-off
//!
//! Runs the dependent program once assets are in place. The absolute
//! target directory is appended as the program's last positional argument;
//! the program treats it as its working-data directory.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Absolute form of `target_dir`, resolved against the current directory
pub fn handoff_path(target_dir: &Path) -> io::Result<PathBuf> {
    if target_dir.is_absolute() {
        Ok(target_dir.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(target_dir))
    }
}

/// The dependent program and its leading arguments
#[derive(Debug, Clone)]
pub struct Launcher {
    program: OsString,
    args: Vec<OsString>,
}

impl Launcher {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Build the command without running it
    pub fn command(&self, target_dir: &Path) -> io::Result<Command> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(handoff_path(target_dir)?);
        Ok(cmd)
    }

    /// Run the program to completion
    pub fn launch(&self, target_dir: &Path) -> io::Result<ExitStatus> {
        let mut cmd = self.command(target_dir)?;
        log::info!(
            "launching {} with data directory {}",
            self.program.to_string_lossy(),
            target_dir.display()
        );
        cmd.status()
    }
}
