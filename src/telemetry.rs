//! Tracing setup for hosts embedding `humble-vis`.
//!
//! Container mutations and render passes log under the `humble_vis` target.
//! Hosts either call `init_default_tracing` or install their own subscriber
//! and filter on that target.

/// Filter used when `RUST_LOG` is unset: quiet dependencies, container
/// render passes at `debug`.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "warn,humble_vis=debug";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` overrides `DEFAULT_FILTER_DIRECTIVE`. Returns `false` when the
/// feature is disabled or a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER_DIRECTIVE));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
