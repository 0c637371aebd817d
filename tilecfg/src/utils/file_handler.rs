use crate::Config;
use anyhow::{self, bail, Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const PREFIX: &str = "tilecfg";

const COMMENT_HEADER: &str = r"//  _   _ _       __
// | |_(_) | ___ / _| __ _
// | __| | |/ _ \ |_ / _` |
// | |_| | |  __/  _| (_| |
//  \__|_|_|\___|_|  \__, |
//                   |___/
// Declarative configuration for a tiling window manager.
// Every section is optional, omitted ones fall back to the defaults.

";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

#[must_use]
pub fn check_file_type(path: &Path) -> ConfigFileType {
    if path.extension() == Some(OsStr::new("toml")) {
        ConfigFileType::TomlFile
    } else {
        ConfigFileType::RonFile
    }
}

/// Path of `config.ron` in the user's config directory, created if missing.
///
/// # Errors
///
/// Errors if the XDG base directories cannot be resolved or created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix(PREFIX)?.place_config_file("config.ron")?;
    Ok(path)
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.ron, if the config file cannot be read (access rights, malformed
/// file, etc.).
/// Function can also error from inability to save config.ron (if it is the first time running
/// `tilecfg`).
pub fn load_config_file() -> Result<Config> {
    tracing::debug!("Loading config file");

    let path = BaseDirectories::with_prefix(PREFIX)?;

    // the checks and fallback for `toml` can be removed when toml gets eventually deprecated
    let config_file_ron = path.place_config_file("config.ron")?;
    let config_file_toml = path.place_config_file("config.toml")?;

    if config_file_ron.exists() {
        tracing::debug!("Config file '{}' found.", config_file_ron.display());
        load_from_path(&config_file_ron)
    } else if config_file_toml.exists() {
        tracing::debug!("Config file '{}' found.", config_file_toml.display());
        let config = load_from_path(&config_file_toml)?;
        tracing::warn!("You are using TOML as config language which will be deprecated in the future. Please consider migrating your config to RON with `tilecfg-check -m`.");
        Ok(config)
    } else {
        tracing::debug!("Config file not found. Using default config file.");

        let config = Config::default();
        write_to_file(&config_file_ron, &config)?;
        Ok(config)
    }
}

/// Parse a config file, picking RON or TOML from its extension.
///
/// # Errors
///
/// Errors if the file cannot be read or does not parse.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file `{}`", path.display()))?;
    let config = match check_file_type(path) {
        ConfigFileType::RonFile => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            ron.from_str(&contents)
                .with_context(|| format!("Could not parse `{}`", path.display()))?
        }
        ConfigFileType::TomlFile => toml::from_str(&contents)
            .with_context(|| format!("Could not parse `{}`", path.display()))?,
    };
    Ok(config)
}

/// Loads configuration from either specified file (preferred) or default.
///
/// # Errors
///
/// Errors if file cannot be read. Indicates filesystem error
/// (inadequate permissions, disk full, etc.)
/// If a path is specified and does not exist, an error is returned.
pub fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_filename = if let Some(fspath) = fspath {
        println!("\x1b[1;35mNote: Using file {fspath} \x1b[0m");
        let path = PathBuf::from(fspath);
        if !path.exists() {
            bail!("No config file at `{fspath}`");
        }
        path
    } else {
        let ron_file = get_default_path()?;
        let toml_file = ron_file.with_extension("toml");
        if ron_file.exists() {
            ron_file
        } else if toml_file.exists() {
            println!(
                "\x1b[1;93mWARN: TOML as config format is about to be deprecated.
      Please consider migrating to RON manually or by using `tilecfg-check -m`.\x1b[0m"
            );
            toml_file
        } else {
            let config = Config::default();
            write_to_file(&ron_file, &config)?;
            return Ok(config);
        }
    };

    if verbose {
        dbg!(&config_filename);
        dbg!(fs::read_to_string(&config_filename)?);
    }
    load_from_path(&config_filename)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<(), anyhow::Error> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}

/// Rewrite a TOML config as RON next to it, keeping the TOML file.
///
/// Returns the path of the new RON file.
///
/// # Errors
///
/// Errors if the TOML file does not parse, or if a RON file already exists.
pub fn migrate_config(toml_file: &Path, verbose: bool) -> Result<PathBuf> {
    if check_file_type(toml_file) != ConfigFileType::TomlFile {
        bail!("`{}` is not a TOML file", toml_file.display());
    }
    let ron_file = toml_file.with_extension("ron");
    if ron_file.exists() {
        bail!(
            "`{}` already exists, refusing to overwrite it",
            ron_file.display()
        );
    }
    let config = load_from_path(toml_file)?;
    if verbose {
        dbg!(&config);
    }
    write_to_file(&ron_file, &config)?;
    Ok(ron_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecfg_core::models::Group;

    #[test]
    fn written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        let config = Config::default();
        write_to_file(&path, &config).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("//"));
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn partial_ron_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, r#"(modkey: "Mod1", log_level: "info")"#).unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.modkey, "Mod1");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.groups, Config::default().groups);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(
            &path,
            r#"(groups: [(name: "1", label: "one", colour: "red")])"#,
        )
        .unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_from_path(Path::new("/nonexistent/tilecfg/config.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tilecfg/config.ron"));
    }

    #[test]
    fn toml_config_migrates_to_ron() {
        let dir = tempfile::tempdir().unwrap();
        let toml_file = dir.path().join("config.toml");
        let mut config = Config::default();
        config.groups.push(Group::new("6", "six"));
        fs::write(&toml_file, toml::to_string(&config).unwrap()).unwrap();

        let ron_file = migrate_config(&toml_file, false).unwrap();
        assert_eq!(ron_file, dir.path().join("config.ron"));
        assert!(toml_file.exists());
        assert_eq!(load_from_path(&ron_file).unwrap(), config);

        // a second run must not clobber the new file
        assert!(migrate_config(&toml_file, false).is_err());
    }

    #[test]
    fn file_type_follows_the_extension() {
        assert_eq!(
            check_file_type(Path::new("a/config.toml")),
            ConfigFileType::TomlFile
        );
        assert_eq!(
            check_file_type(Path::new("a/config.ron")),
            ConfigFileType::RonFile
        );
    }
}
