//! Error macros for routefinder

/// Macro for returning a malformed-row error
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::RouteError::malformed($line, format!($($arg)+)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}
