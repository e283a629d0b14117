use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset
fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info"
    } else {
        "debug"
    }
}

/// Initialize tracing for the order services.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events without
///   module targets, `info` and above.
/// - **Development** (default): pretty output, `debug` and above.
///
/// Both variants install `tracing_error::ErrorLayer` so errors can carry the
/// span trace of the workflow step that produced them. `RUST_LOG` overrides the
/// default level (e.g. `RUST_LOG=domain_orders=trace`).
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(environment = ?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
