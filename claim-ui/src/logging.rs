//! Log output for `claim-estimator`.
//!
//! Events go to stderr, so stdout carries only what a command prints, and
//! are also appended to a file when one is given.

use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Fallback filter when neither `RUST_LOG` nor a configured level is given.
pub const DEFAULT_LEVEL: &str = "info";

/// Timestamp, level and target, then the event's fields.
///
/// Analytics and lead events are told apart by target, so it is always shown.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if writer.has_ansi_escapes() {
            let color = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[{color}m{:>5}\x1b[0m \x1b[36m{}\x1b[0m ",
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} {} ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// `RUST_LOG` wins over `fallback`; an invalid `fallback` becomes
/// [`DEFAULT_LEVEL`].
fn make_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global subscriber.
///
/// `level` is any `EnvFilter` directive, e.g. `debug` or
/// `info,claim::analytics=off`. When `file` is given it is opened for append
/// and receives the same events without colour.
///
/// # Errors
///
/// When the file cannot be opened, or a subscriber is already installed.
pub fn init_logging(
    level: &str,
    file: Option<&Path>,
) -> Result<()> {
    let file = file
        .map(|path| {
            File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))
        })
        .transpose()?;

    let stderr_layer = fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = file.map(|file| {
        fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(make_filter(level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging is already initialized")
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing::{info, warn};
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .event_format(LocalFmt)
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );

        tracing::subscriber::with_default(subscriber, emit);
        captured.text()
    }

    #[test]
    fn plain_lines_carry_level_target_and_fields() {
        let text = capture(|| info!(target: "claim::leads", calculator = "pfas", "lead received"));

        let line = text.lines().next().unwrap();
        assert!(
            line.ends_with(" INFO claim::leads lead received calculator=\"pfas\""),
            "got: {line}"
        );
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn levels_are_right_aligned() {
        let text = capture(|| warn!(target: "claim::analytics", "slow"));

        assert!(text.contains("  WARN claim::analytics slow"), "got: {text}");
    }

    #[test]
    fn missing_log_directory_is_reported() {
        let path = Path::new("/nonexistent-claim-dir/claim.log");

        let err = init_logging("info", Some(path)).unwrap_err();

        assert!(err.to_string().contains("cannot open log file"), "got: {err}");
    }
}
