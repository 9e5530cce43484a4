use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Builds the filter: the configured level, refined by any `RUST_LOG` directives.
fn build_filter(logging_config: &LoggingConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(logging_config.level.as_filter().into())
        .from_env_lossy()
}

pub fn init_logging(logging_config: &LoggingConfig) {
    let filter_layer = build_filter(logging_config);

    match logging_config.format {
        LogFormat::Json => {
            // One JSON object per line, span context flattened in
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(
                    fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_current_span(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
        }
        LogFormat::Console => {
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}
