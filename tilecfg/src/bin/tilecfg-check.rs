use anyhow::{bail, Result};
use clap::{arg, command};
use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};
use tilecfg::utils::file_handler::{check_config_file, get_default_path, migrate_config};
use tilecfg::Config;

fn main() -> Result<()> {
    let matches = command!("tilecfg Check")
        .about("Checks syntax and integrity of the configuration file")
        .help_template(tilecfg::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!(migrate: -m --"migrate-toml-to-ron" "Migrates an existing `toml` based config to a `ron` based one.\nKeeps the old file for reference, please delete it manually."),
            arg!([INPUT] "Sets the input file to use. Uses the file in the XDG config directory otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tilecfg version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tilecfg git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );
    if matches.get_flag("migrate") {
        println!("\x1b[0;94m::\x1b[0m Migrating configuration . . .");
        let toml_file = if let Some(config_file) = config_file {
            PathBuf::from(config_file)
        } else {
            get_default_path()?.with_extension("toml")
        };
        let ron_file = migrate_config(&toml_file, verbose)?;
        println!(
            "\x1b[0;92m    -> Wrote {} \x1b[0m",
            ron_file.display()
        );
        return Ok(());
    }

    check_enabled_features();

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let ok = match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            check_config(&config, verbose)
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Run every check, even after one failed, so the user sees all problems at once.
fn check_config(config: &Config, verbose: bool) -> bool {
    let checks = [
        config.check_modkey(verbose),
        config.check_log_level(verbose),
        config.check_tables(verbose),
        check_autostart(config.autostart.as_deref(), verbose),
    ];
    checks.iter().all(|ok| *ok)
}

/// The startup script is optional, but if configured it must be runnable.
fn check_autostart(script: Option<&Path>, verbose: bool) -> bool {
    println!("\x1b[0;94m::\x1b[0m Checking startup script . . .");
    let Some(script) = script else {
        println!("\x1b[0;92m    -> No startup script configured \x1b[0m");
        return true;
    };
    let script = tilecfg_core::utils::child_process::expand_path(script);
    match check_permissions(&script, verbose) {
        Ok(()) => {
            println!("\x1b[0;92m    -> Startup script OK \x1b[0m");
            true
        }
        Err(e) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {e} \x1b[0m");
            false
        }
    }
}

fn check_permissions(filepath: &Path, verbose: bool) -> Result<()> {
    let Ok(metadata) = fs::metadata(filepath) else {
        bail!("Startup script `{}` not found!", filepath.display());
    };
    let permissions = metadata.permissions();
    if metadata.is_file() && (permissions.mode() & 0o111 != 0) {
        if verbose {
            println!(
                "Found `{}` with executable permissions: {:?}",
                filepath.display(),
                permissions.mode() & 0o111 != 0,
            );
        }
        Ok(())
    } else {
        bail!(
            "Found `{}`, but missing executable permissions!",
            filepath.display(),
        );
    }
}

// this function is called only when specific features are enabled.
#[allow(dead_code)]
fn check_feature<T, E, F>(name: &str, predicate: F)
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Debug,
{
    match predicate() {
        Ok(_) => println!("\x1b[0;92m    -> {name} OK\x1b[0m"),
        Err(err) => println!(
            "\x1b[1;91mERROR:\x1b[0m\x1b[1m Check for feature {name} failed: {err:?} \x1b[0m"
        ),
    }
}

fn check_enabled_features() {
    if env!("TILECFG_FEATURES").is_empty() {
        println!("\x1b[0;94m::\x1b[0m Built with no enabled features.");
        return;
    }

    println!(
        "\x1b[0;94m::\x1b[0m Enabled features:{}",
        env!("TILECFG_FEATURES")
    );

    println!("\x1b[0;94m::\x1b[0m Checking feature dependencies . . .");

    #[cfg(feature = "journald-log")]
    check_feature("journald-log", tracing_journald::layer);
    #[cfg(feature = "file-log")]
    check_feature("file-log", || {
        fs::create_dir_all(shellexpand::tilde("~/.cache/tilecfg").as_ref())
    });
}
