use std::{fs::File, sync::Mutex};

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides `default_directive`.
///
/// With `log_file` set, plain text goes to that file; otherwise to stderr.
pub fn init(log_file: Option<&str>, default_directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Logs go nowhere by default while the terminal is drawn to, since stderr
/// shares the screen
pub fn default_directive(window: bool, log_file: Option<&str>) -> &'static str {
    if window || log_file.is_some() {
        "info"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_without_log_file_is_silent() {
        assert_eq!(default_directive(false, None), "off");
        assert_eq!(default_directive(false, Some("life.log")), "info");
        assert_eq!(default_directive(true, None), "info");
    }
}
