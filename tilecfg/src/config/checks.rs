use super::Config;
use tilecfg_core::Snapshot;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Runs the same modkey validation as `Snapshot::build`.
    pub fn check_modkey(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking if modkey is a modifier.");
        }
        match tilecfg_core::Config::modkey(self) {
            Ok(_) => {
                if verbose {
                    println!("Modkey is okay.");
                }
                true
            }
            Err(err) => {
                println!("\x1b[1;91mERROR: {err}\x1b[0m");
                println!("Help: every group binding would fire without a real modifier held.");
                false
            }
        }
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("\x1b[1;91mERROR: Log level is invalid: {err}\x1b[0m");
                false
            }
        }
    }

    /// Run every integrity check and print what is wrong.
    ///
    /// Unlike building a snapshot, this does not stop at the first problem.
    pub fn check_tables(&self, verbose: bool) -> bool {
        println!("\x1b[0;94m::\x1b[0m Checking keybinds, groups, layouts, bar and rules . . .");
        if verbose {
            for keybind in &self.keybind {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
        }
        let errors = Snapshot::check_all(self);
        if errors.is_empty() {
            println!("\x1b[0;92m    -> All tables OK\x1b[0m");
            true
        } else {
            for error in errors {
                println!("\x1b[1;91mERROR: {error}\x1b[0m");
            }
            println!("Help: every group name doubles as the key of its switch-to-group binding.");
            false
        }
    }
}
