//! Error macros for graphkit

/// Macro for returning a malformed input error at a given line
#[macro_export]
macro_rules! bail_malformed {
    ($line:expr, $($arg:tt)+) => {
        return Err($crate::error::GraphkitError::malformed($line, format!($($arg)+)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphkitError::UsageError($msg.to_string()))
    };
}
