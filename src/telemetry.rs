//! Telemetry helpers for applications embedding `passline`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call one of the
//! initializers here or install their own `tracing` subscriber and filters
//! before driving the engine.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled, honoring `RUST_LOG` and falling back to `info`.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when nothing was initialized (feature disabled) or when
/// the host application already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback("info")
}

/// Like [`init_default_tracing`] with an explicit fallback directive used
/// when `RUST_LOG` is unset, e.g. `"passline=trace"` while debugging
/// gesture handling.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
