use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["wird", "wird_plan", "wird_cycle", "wird_progress"];

/// Initialize tracing from the CLI verbosity count: `warn` by default,
/// then `info`, `debug`, and `trace` at `-v`, `-vv`, and `-vvv`.
///
/// A set `RUST_LOG` env var overrides the flag. Logs go to stderr; the
/// rendered schedule owns stdout.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
