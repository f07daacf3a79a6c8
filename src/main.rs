//! otel-options: inspect and resolve OpenTelemetry agent configuration

use anyhow::Result;

fn main() -> Result<()> {
    otel_options::cli::run()
}
