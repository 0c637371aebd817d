use anyhow::{bail, Result};
use clap::{arg, command};
use std::env;
use std::process::Command;
use tilecfg::utils::file_handler::{get_default_path, write_to_file};
use tilecfg::Config;

fn main() -> Result<()> {
    let matches = command!("tilecfg Config")
        .about("Edit the config with the default editor")
        .help_template(tilecfg::utils::get_help_template())
        .args(&[arg!(-n --new "Only generate a new config file")])
        .get_matches();

    if matches.get_flag("new") {
        generate_new_config()?;
    } else {
        run_editor()?;
    }

    Ok(())
}

fn find_config_file() -> Result<std::path::PathBuf> {
    let path = get_default_path()?;
    let toml = path.with_extension("toml");
    if toml.exists() && !path.exists() {
        return Ok(toml);
    }
    if !path.exists() {
        write_to_file(&path, &Config::default())?;
    }
    Ok(path)
}

// asks before replacing an existing config
fn generate_new_config() -> Result<()> {
    let path = get_default_path()?;

    if path.exists() {
        println!(
            "\x1b[0;94m::\x1b[0m A config file already exists, do you want to override it? [y/N]"
        );
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        if !(line.contains('y') || line.contains('Y')) {
            return Ok(());
        }
    }
    write_to_file(&path, &Config::default())?;
    println!("\x1b[0;92m    -> Wrote {} \x1b[0m", path.display());

    Ok(())
}

fn run_editor() -> Result<()> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_owned());
    let config_path = find_config_file()?;

    let status = Command::new(&editor).arg(&config_path).status()?;
    if !status.success() {
        bail!("Failed to run {editor}");
    }
    Ok(())
}
