use std::env;
use std::io;

use tracing_subscriber::EnvFilter;

/// Map the CLI `-v` count to a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber for the binary.
///
/// Logs go to stderr so stdout stays usable for `--json` output. `RUST_LOG`
/// takes precedence over the verbosity flag. Calling this twice is a no-op.
pub fn init_logging(verbosity: u8) {
    let filter = env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(level_for_verbosity(verbosity)),
        EnvFilter::new,
    );

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }
}
