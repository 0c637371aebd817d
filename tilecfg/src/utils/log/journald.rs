use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

pub fn add_layer<S>(subscriber: S) -> impl Subscriber + Send + Sync + for<'span> LookupSpan<'span>
where
    S: Subscriber + Send + Sync + for<'span> LookupSpan<'span>,
{
    let layer = match tracing_journald::layer() {
        Ok(layer) => Some(layer.with_syslog_identifier("tilecfg".to_owned())),
        Err(err) => {
            eprintln!("Couldn't setup journald-logger, is journald running? {err}");
            None
        }
    };
    subscriber.with(layer)
}
