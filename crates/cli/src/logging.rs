use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Install the global subscriber.
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` overrides `level`. The returned guard must be kept alive for
/// the duration of the program or buffered lines are lost.
pub fn init_logging(level: tracing::Level) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(writer)
        .with_filter(env_filter);

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        eprintln!("Warning: a global tracing subscriber was already installed");
    }

    guard
}
