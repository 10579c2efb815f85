use anyhow::{Context, anyhow};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::{MakeWriterExt, Tee, WithMaxLevel};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `base_level`. Everything goes to stdout,
/// warnings and errors additionally to stderr.
pub fn setup_logging(base_level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base_level))
        .with_context(|| format!("Invalid log filter: {}", base_level))?;

    let console_writer = split_console_writer(std::io::stdout, std::io::stderr);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .with_writer(console_writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow!("Logger initialization failed: {}", e))
}

/// Every event goes to `out`; WARN and ERROR also go to `err`.
///
/// `with_max_level` keeps events at most as verbose as the given level.
fn split_console_writer<O, E>(out: O, err: E) -> Tee<O, WithMaxLevel<E>>
where
    O: for<'a> MakeWriter<'a>,
    E: for<'a> MakeWriter<'a>,
{
    out.and(err.with_max_level(Level::WARN))
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_warnings_and_errors_reach_stderr() {
        let out = Capture::default();
        let err = Capture::default();
        let writer = split_console_writer(
            {
                let out = out.clone();
                move || out.clone()
            },
            {
                let err = err.clone();
                move || err.clone()
            },
        );
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("error-event");
            tracing::warn!("warn-event");
            tracing::info!("info-event");
            tracing::debug!("debug-event");
            tracing::trace!("trace-event");
        });

        let out = out.contents();
        for event in ["error-event", "warn-event", "info-event", "debug-event", "trace-event"] {
            assert!(out.contains(event), "stdout missing {}", event);
        }

        let err = err.contents();
        assert!(err.contains("error-event"), "stderr: {}", err);
        assert!(err.contains("warn-event"), "stderr: {}", err);
        assert!(!err.contains("info-event"), "stderr: {}", err);
        assert!(!err.contains("debug-event"), "stderr: {}", err);
        assert!(!err.contains("trace-event"), "stderr: {}", err);
    }

    #[test]
    fn test_second_setup_reports_already_initialized() {
        // Either this call or one from another test in the binary wins.
        let _ = setup_logging("debug");
        let err = setup_logging("debug").unwrap_err();
        assert!(err.to_string().contains("Logger initialization failed"));
    }
}
