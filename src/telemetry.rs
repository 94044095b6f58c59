use anyhow::Result;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

pub const DEFAULT_FILTER: &str = "info";

/// Where log records are written.
#[derive(Debug, Clone, Copy)]
pub enum Sink {
    Stdout,
    Stderr,
}

/// Bunyan-formatted JSON logs, filtered by `RUST_LOG` (falls back to `env_filter`).
pub fn get_subscriber<W>(name: String, env_filter: &str, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, writer);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs the global subscriber, writing through a non-blocking appender.
/// The returned guard flushes pending records when dropped and must be kept
/// alive for the lifetime of the process.
pub fn init(name: &str, sink: Sink) -> Result<WorkerGuard> {
    let (writer, guard) = match sink {
        Sink::Stdout => tracing_appender::non_blocking(std::io::stdout()),
        Sink::Stderr => tracing_appender::non_blocking(std::io::stderr()),
    };
    LogTracer::init()?;
    set_global_default(get_subscriber(name.to_owned(), DEFAULT_FILTER, writer))?;
    Ok(guard)
}
