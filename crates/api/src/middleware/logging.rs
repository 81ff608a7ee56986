//! Logging initialization and configuration.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Crates whose logs follow the configured level; everything else stays at warn.
const OWN_CRATES: [&str; 4] = ["wardrobe_ledger_api", "wardrobe_ledger", "persistence", "domain"];

/// Builds the filter directive for a configured level, e.g. `warn,persistence=debug,...`.
fn default_directive(level: &str) -> String {
    let mut directive = String::from("warn,tower_http=info");
    for krate in OWN_CRATES {
        directive.push_str(&format!(",{}={}", krate, level));
    }
    directive
}

/// Initializes the logging subsystem based on configuration.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true);
            subscriber.with(json_layer).init();
        }
        _ => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);
            subscriber.with(pretty_layer).init();
        }
    }
}
