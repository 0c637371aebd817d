use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald-log")]
mod journald;

#[cfg(feature = "file-log")]
pub mod file;

/// Build the subscriber for `level_regex`, an `EnvFilter` directive such as
/// `warn` or `tilecfg_core=debug`.
///
/// An invalid directive falls back to `warn` and is handed back so the caller
/// can report it once logging is up.
#[must_use]
pub fn parse_log_level(
    level_regex: &str,
) -> (impl Subscriber + Send + Sync, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::default().add_directive(LevelFilter::WARN.into())
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber + Send + Sync {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald-log")]
    let subscriber = journald::add_layer(subscriber);

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

/// Install the subscriber for `level_regex` as the global default.
///
/// `RUST_LOG` overrides the configured level when set.
pub fn setup(level_regex: &str) {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| level_regex.to_owned());
    let (subscriber, parse_err) = parse_log_level(&level);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("A global logger was already installed");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log_level `{level}`, falling back to warn: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        for level in ["warn", "debug", "tilecfg_core=trace,warn"] {
            let (_, err) = parse_log_level(level);
            assert!(err.is_none(), "{level} should parse");
        }
    }

    #[test]
    fn invalid_level_is_reported() {
        let (_, err) = parse_log_level("tilecfg=loud");
        assert!(err.is_some());
    }
}
