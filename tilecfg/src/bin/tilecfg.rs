use anyhow::{Context, Result};
use clap::{arg, command, value_parser};
use std::path::PathBuf;
use tilecfg::utils::{file_handler, log};
use tilecfg_core::{ScriptRunner, Session, Snapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Ron,
    Json,
}

fn main() {
    let matches = command!("tilecfg")
        .about("Validates the configuration and prints the resulting snapshot")
        .help_template(tilecfg::utils::get_help_template())
        .args(&[
            arg!(--restart "Rebuild the snapshot without running the startup script."),
            arg!(-f --format <FORMAT> "Output format of the snapshot.")
                .value_parser(["ron", "json"])
                .default_value("ron"),
            arg!([CONFIG] "Sets the config file to use. Uses the file in the XDG config directory otherwise.")
                .value_parser(value_parser!(PathBuf)),
        ])
        .get_matches();

    let config_file = matches.get_one::<PathBuf>("CONFIG");
    let restart = matches.get_flag("restart");
    let format = match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => Format::Json,
        _ => Format::Ron,
    };

    if let Err(err) = run(config_file, restart, format) {
        eprintln!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err:#} \x1b[0m");
        std::process::exit(1);
    }
}

fn run(config_file: Option<&PathBuf>, restart: bool, format: Format) -> Result<()> {
    let config = match config_file {
        Some(path) => file_handler::load_from_path(path)?,
        None => tilecfg::load()?,
    };
    log::setup(&config.log_level);
    tracing::info!(
        "tilecfg {} ({})",
        env!("CARGO_PKG_VERSION"),
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    let session = if restart {
        Session::resume(&config)
    } else {
        Session::start(&config, &mut ScriptRunner::new())
    }
    .context("Configuration is invalid")?;

    println!("{}", render(session.snapshot(), format)?);
    Ok(())
}

fn render(snapshot: &Snapshot, format: Format) -> Result<String> {
    let out = match format {
        Format::Ron => ron::ser::to_string_pretty(snapshot, ron::ser::PrettyConfig::new())?,
        Format::Json => serde_json::to_string_pretty(snapshot)?,
    };
    Ok(out)
}
