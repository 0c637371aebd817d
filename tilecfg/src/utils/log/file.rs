use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

const LOG_DIR: &str = "~/.cache/tilecfg";
const LOG_FILE_NAME: &str = "log.log";

pub fn add_layer<S>(subscriber: S) -> impl Subscriber + Send + Sync + for<'span> LookupSpan<'span>
where
    S: Subscriber + Send + Sync + for<'span> LookupSpan<'span>,
{
    let dir = log_dir();
    let layer = match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(get_log_writer(&dir)),
        ),
        Err(err) => {
            eprintln!("Couldn't create log directory {}: {err}", dir.display());
            None
        }
    };
    subscriber.with(layer)
}

fn log_dir() -> PathBuf {
    PathBuf::from(shellexpand::tilde(LOG_DIR).as_ref())
}

// the appender writes synchronously, a non-blocking writer would need its guard
// kept alive for the whole process
fn get_log_writer(dir: &Path) -> RollingFileAppender {
    tracing_appender::rolling::never(dir, LOG_FILE_NAME)
}
