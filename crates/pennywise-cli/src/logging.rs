use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "warn";

/// Installs a stderr subscriber so log lines never mix with command output.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to both
/// pennywise crates.
pub fn init(level: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("a global subscriber was already installed, keeping it");
    }
}

fn resolve_filter(level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(crate_directives(level))
        .unwrap_or_else(|_| EnvFilter::new(crate_directives(FALLBACK_LEVEL)))
}

fn crate_directives(level: &str) -> String {
    format!("pennywise={level},pennywise_client={level}")
}
