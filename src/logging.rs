use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging.
///
/// Honors the `ROUTEGRAPH_LOG` environment variable (or the standard
/// `RUST_LOG`) as an env-filter override; falls back to the given level.
pub fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ROUTEGRAPH_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("routegraph={}", level)
            })
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_plain_level() {
        // First init wins; a second call would report the global default
        // subscriber as already set
        let first = init_tracing("debug");
        let second = init_tracing("routegraph=trace");
        assert!(first.is_ok());
        assert!(second.is_err());
    }
}
