//! logging.rs
//! Tracing subscriber for the binary. Logs go to stderr: stdout may carry frame bytes.
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter from an explicit `directive`, falling back to the `-v` level.
fn build_filter(verbosity: u8, directive: Option<&str>) -> Result<EnvFilter> {
    let directive = directive.unwrap_or_else(|| default_filter(verbosity));
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter {:?}", directive))
}

/// Install the global subscriber. An explicit `directive` wins over `-v`.
pub fn init_logging(verbosity: u8, directive: Option<&str>) -> Result<()> {
    let filter = build_filter(verbosity, directive)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(9), "trace");
    }

    #[test]
    fn explicit_directive_is_accepted() {
        assert!(build_filter(0, Some("lzframe_core=debug")).is_ok());
        assert!(build_filter(3, None).is_ok());
    }

    #[test]
    fn invalid_directive_is_an_error() {
        let err = build_filter(0, Some("lzframe_core=loudest")).unwrap_err();
        assert!(err.to_string().contains("Invalid log filter"), "{:#}", err);
    }
}
