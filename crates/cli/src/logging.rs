//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive.
pub(crate) const LOG_ENV: &str = "KITFORGE_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: `KITFORGE_LOG`, then the configured level,
/// then `debug` for `--verbose`, else `warn`.
pub(crate) fn directive(env: Option<String>, configured: Option<&str>, verbose: bool) -> String {
    if let Some(value) = env.filter(|v| !v.trim().is_empty()) {
        return value;
    }
    if let Some(level) = configured.filter(|l| !l.trim().is_empty()) {
        return level.to_string();
    }
    if verbose {
        "debug".to_string()
    } else {
        DEFAULT_LEVEL.to_string()
    }
}

/// Install a stderr `fmt` subscriber.
pub(crate) fn init(configured: Option<&str>, verbose: bool) -> Result<(), String> {
    let directive = directive(std::env::var(LOG_ENV).ok(), configured, verbose);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| format!("invalid log filter '{}': {}", directive, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("could not initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins() {
        assert_eq!(
            directive(Some("trace".to_string()), Some("info"), true),
            "trace"
        );
    }

    #[test]
    fn config_before_verbose() {
        assert_eq!(directive(None, Some("info"), true), "info");
        assert_eq!(directive(Some("  ".to_string()), Some("info"), false), "info");
    }

    #[test]
    fn verbose_then_default() {
        assert_eq!(directive(None, None, true), "debug");
        assert_eq!(directive(None, Some(""), false), "warn");
    }
}
