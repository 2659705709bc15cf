//! Telemetry helpers for applications embedding `buridan-charts`.
//!
//! Builders emit `tracing` events while storing series and compiling trees.
//! Subscriber setup stays explicit and opt-in: consumers either call one of
//! the helpers below or wire their own `tracing` subscriber and filters.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "buridan_charts=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`], with caller supplied fallback directives
/// (for example `"buridan_charts=trace"` to see every stored series).
#[must_use]
pub fn init_tracing_with_filter(fallback_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directives)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directives;
        false
    }
}
