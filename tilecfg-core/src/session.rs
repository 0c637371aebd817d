use crate::config::Config;
use crate::errors::Result;
use crate::snapshot::Snapshot;
use crate::utils::child_process::StartupHook;
use std::sync::Arc;

/// The runtime's view of the configuration across restarts.
///
/// The startup hook runs in [`Session::start`] only. A restart rebuilds the
/// snapshot from the configuration and never reruns the hook.
#[derive(Debug)]
pub struct Session {
    snapshot: Arc<Snapshot>,
    restarts: usize,
}

impl Session {
    /// First startup: build the snapshot, then run the startup script.
    ///
    /// A failing script is logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate; the hook is not run then.
    pub fn start(config: &impl Config, hook: &mut impl StartupHook) -> Result<Self> {
        let session = Self::resume(config)?;
        if let Some(script) = &session.snapshot.autostart {
            if let Err(err) = hook.run(script) {
                tracing::error!("Startup script {} failed: {}", script.display(), err);
            }
        }
        Ok(session)
    }

    /// Start from a configuration without running the startup hook, as after
    /// the runtime re-executed itself.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate.
    pub fn resume(config: &impl Config) -> Result<Self> {
        Ok(Self {
            snapshot: Arc::new(Snapshot::build(config)?),
            restarts: 0,
        })
    }

    /// Throw the current snapshot away and build a new one.
    ///
    /// # Errors
    ///
    /// Fails if the new configuration does not validate, in which case the
    /// previous snapshot stays in place.
    pub fn restart(&mut self, config: &impl Config) -> Result<()> {
        tracing::info!("Restarting, rebuilding configuration");
        let snapshot = Snapshot::build(config)?;
        self.snapshot = Arc::new(snapshot);
        self.restarts += 1;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// A handle on the current snapshot that outlives later restarts.
    #[must_use]
    pub fn shared(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    #[must_use]
    pub const fn restarts(&self) -> usize {
        self.restarts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::errors::ConfigError;
    use crate::models::{Group, LayoutConfig, StackOptions};
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct RecordingHook {
        runs: Vec<PathBuf>,
        fail: bool,
    }

    impl StartupHook for RecordingHook {
        fn run(&mut self, script: &Path) -> Result<()> {
            self.runs.push(script.to_owned());
            if self.fail {
                return Err(ConfigError::IoError(std::io::Error::from(
                    std::io::ErrorKind::NotFound,
                )));
            }
            Ok(())
        }
    }

    fn config() -> TestConfig {
        TestConfig {
            autostart: Some(PathBuf::from("/opt/autostart.sh")),
            ..TestConfig::default()
        }
    }

    #[test]
    fn hook_runs_once_on_first_start_only() {
        let config = config();
        let mut hook = RecordingHook::default();
        let mut session = Session::start(&config, &mut hook).unwrap();
        session.restart(&config).unwrap();
        session.restart(&config).unwrap();
        assert_eq!(hook.runs, vec![PathBuf::from("/opt/autostart.sh")]);
        assert_eq!(session.restarts(), 2);
    }

    #[test]
    fn failing_hook_does_not_abort_startup() {
        let mut hook = RecordingHook {
            fail: true,
            ..RecordingHook::default()
        };
        let session = Session::start(&config(), &mut hook).unwrap();
        assert_eq!(hook.runs.len(), 1);
        assert_eq!(session.snapshot().groups.len(), 2);
    }

    #[test]
    fn invalid_config_skips_the_hook() {
        let mut config = config();
        config.layouts.clear();
        let mut hook = RecordingHook::default();
        assert!(Session::start(&config, &mut hook).is_err());
        assert!(hook.runs.is_empty());
    }

    #[test]
    fn restart_rebuilds_instead_of_patching() {
        let mut config = config();
        let mut session = Session::resume(&config).unwrap();
        let before = session.shared();

        config.groups.push(Group::new("3", "three"));
        session.restart(&config).unwrap();
        assert_eq!(before.groups.len(), 2);
        assert_eq!(session.snapshot().groups.len(), 3);

        // a restart with the same input reproduces the same tables
        let again = Session::resume(&config).unwrap();
        assert_eq!(again.snapshot(), session.snapshot());
    }

    #[test]
    fn failed_restart_keeps_the_previous_snapshot() {
        let mut config = config();
        let mut session = Session::resume(&config).unwrap();
        config.layouts = vec![LayoutConfig::Stack(StackOptions {
            num_stacks: 0,
            ..StackOptions::default()
        })];
        assert!(session.restart(&config).is_err());
        assert_eq!(session.restarts(), 0);
        assert_eq!(session.snapshot().layouts.len(), 1);
    }
}
