//! Tracing setup: subscriber initialisation, span macros, structured events.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use warden_core::config::ObservabilityConfig;
use warden_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// `WARDEN_LOG` takes precedence over `config.log_level`. Logs go to stderr
/// so stdout stays free for responses.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);

        // try_init: a host application may already own the global subscriber.
        let _ = if config.json_logs {
            builder
                .json()
                .with_current_span(true)
                .try_init()
        } else {
            builder.try_init()
        };
    });
}
