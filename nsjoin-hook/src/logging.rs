//! Opt-in diagnostics for the hook

use nsjoin_namespace::ExecOutcome;
use nsjoin_namespace::config::ENV_LOG;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber if `ddocker_log` is set.
///
/// Returns `false` when logging stays off, including when another subscriber
/// is already installed.
pub fn init_from_env() -> bool {
    let Some(directive) = std::env::var_os(ENV_LOG) else {
        return false;
    };

    let filter = EnvFilter::try_new(directive.to_string_lossy())
        .unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Emit the aggregated outcome: one JSON event plus a warning per failed kind
pub fn log_outcome(outcome: &ExecOutcome) {
    for attempt in outcome.report.failures() {
        warn!(
            kind = %attempt.kind,
            path = %attempt.path.display(),
            outcome = ?attempt.outcome,
            "Namespace not joined"
        );
    }

    match serde_json::to_string(outcome) {
        Ok(json) => info!(
            joined = outcome.report.joined_count(),
            exit_code = outcome.exit_code,
            report = %json,
            "Join report"
        ),
        Err(e) => warn!(error = %e, "Cannot serialize join report"),
    }
}
