//! `intake-check` -- validate patient-registration records from stdin.
//!
//! Reads one JSON candidate record per line and writes one JSON error
//! mapping per line to stdout. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable                 | Required | Default            | Description                              |
//! |--------------------------|----------|--------------------|------------------------------------------|
//! | `INTAKE_SCHEMA_PATH`     | no       | built-in schema    | JSON schema document to validate against |
//! | `INTAKE_CHECK_MODE`      | no       | `fields`           | `fields` or `submission`                 |
//! | `INTAKE_FAIL_ON_INVALID` | no       | `false`            | Exit 1 if any line fails or is rejected  |
//! | `RUST_LOG`               | no       | `intake_check=info`| Log filter                               |

use std::io;

use intake_check::config::CheckConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intake_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CheckConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(2);
    });

    let schema = intake_check::load_schema(config.schema_path.as_deref()).unwrap_or_else(|e| {
        tracing::error!(error = %format!("{e:#}"), "Failed to load schema");
        std::process::exit(2);
    });

    tracing::info!(
        schema = %config
            .schema_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".into()),
        mode = ?config.mode,
        "Starting intake-check",
    );

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let summary = intake_check::run(&schema, config.mode, stdin, stdout).unwrap_or_else(|e| {
        tracing::error!(error = %format!("{e:#}"), "Check failed");
        std::process::exit(2);
    });

    if config.fail_on_invalid && (summary.invalid > 0 || summary.rejected > 0) {
        std::process::exit(1);
    }
}
