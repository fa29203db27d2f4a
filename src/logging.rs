//! Tracing subscriber setup.
//!
//! The scheduler, builder and session emit `tracing` events under the
//! `press_schedule` target: one `info` per pass and per submitted job,
//! `debug` for each placement, `warn` for each reported violation. An
//! embedding planner tool calls [`init`] once to print them.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset: pass summaries from this crate,
/// warnings from everything else.
pub const DEFAULT_DIRECTIVES: &str = "warn,press_schedule=info";

/// Installs a compact global subscriber with [`DEFAULT_DIRECTIVES`].
///
/// Returns `false` if the host application already installed one; its
/// subscriber is left in place.
pub fn init() -> bool {
    init_with(DEFAULT_DIRECTIVES)
}

/// Like [`init`], with caller-chosen directives as the `RUST_LOG` fallback,
/// e.g. `"press_schedule=debug"` to trace every placement.
pub fn init_with(default_directives: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

/// Installs a `press_schedule=debug` subscriber on the test harness's
/// captured writer. Only the first call in a process takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("press_schedule=debug"))
        .with_test_writer()
        .try_init();
}
