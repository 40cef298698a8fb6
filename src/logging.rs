//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled the macros still type-check their
//! arguments but emit nothing.

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { ::log::warn!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = format!($($arg)*);
        }
    }};
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format!($($arg)*);
        }
    }};
}
