#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros so downstream crates log through `sirio_core::debug!` and friends
//! without naming `tracing` themselves. Without the feature it is empty and
//! call sites are compiled out behind `#[cfg(feature = "tracing")]`.
//!
//! The `tracing-json` feature adds [`init_json`], a one-call subscriber
//! setup for production builds that emits newline-delimited JSON filtered by
//! `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "sirio=info,sirio_core=info,sirio_style=info,\
sirio_layout=info,sirio_widgets=info,sirio_showcase=info";

/// Install a global JSON subscriber.
///
/// Returns an error if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
}
