//! Performance logging macros
//!
//! Active in debug builds, compiled out in release builds so the
//! spectrogram inner loops carry no logging overhead.

/// Debug-level timing/size logging - only active in debug builds
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! perf_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

/// Debug-level timing/size logging - no-op in release builds
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! perf_debug {
    ($($arg:tt)*) => {};
}

/// Evaluate an expression and log how long it took under `label`
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! perf_timed {
    ($label:expr, $body:expr) => {{
        let started = std::time::Instant::now();
        let value = $body;
        log::debug!("{} took {:.2?}", $label, started.elapsed());
        value
    }};
}

/// Evaluate an expression without timing it in release builds
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! perf_timed {
    ($label:expr, $body:expr) => {
        $body
    };
}
