//! Runs the startup script.
use crate::errors::{ConfigError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Something the runtime calls exactly once, at first startup.
pub trait StartupHook {
    /// # Errors
    ///
    /// Reports why the script could not be run; the caller decides what to do
    /// with it, there is no retry.
    fn run(&mut self, script: &Path) -> Result<()>;
}

/// Executes the script as a child process and waits for it.
#[derive(Debug, Default)]
pub struct ScriptRunner {}

impl ScriptRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a script with no arguments and blocks until it exits.
    fn run_script(path: &Path) -> Result<()> {
        let status = Command::new(path)
            .stdin(Stdio::null())
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(ConfigError::ScriptFailed(path.display().to_string(), status))
        }
    }
}

impl StartupHook for ScriptRunner {
    fn run(&mut self, script: &Path) -> Result<()> {
        tracing::debug!("Running startup script {}", script.display());
        Self::run_script(script)
    }
}

/// Expand a leading `~` to the user's home directory.
#[must_use]
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("autostart.sh");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn script_runs_to_completion_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let script = write_script(dir.path(), &format!("touch '{}'", marker.display()));
        ScriptRunner::new().run(&script).unwrap();
        assert!(marker.exists());
    }

    #[test]
    fn missing_script_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScriptRunner::new()
            .run(&dir.path().join("nope.sh"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn failing_script_reports_its_status() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "exit 3");
        let err = ScriptRunner::new().run(&script).unwrap_err();
        assert!(matches!(err, ConfigError::ScriptFailed(..)));
    }

    #[test]
    fn paths_without_tilde_are_unchanged() {
        assert_eq!(
            expand_path(Path::new("/etc/autostart.sh")),
            PathBuf::from("/etc/autostart.sh")
        );
    }
}
