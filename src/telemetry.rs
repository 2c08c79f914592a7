//! Opt-in tracing setup for dashboards and report jobs.
//!
//! The library only emits `tracing` events (`debug!` for per-call summaries,
//! `trace!` for per-bar corrections, `warn!` for degenerate windows). Hosts
//! either install their own subscriber or call one of the helpers below.

/// Filter used when `RUST_LOG` is unset: library summaries plus host info.
pub const DEFAULT_FILTER: &str = "info,spc_chart=debug";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to `DEFAULT_FILTER`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as `init_default_tracing` with an explicit fallback directive.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
