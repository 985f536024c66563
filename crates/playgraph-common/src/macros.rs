//! Convenience macros for error handling and propagation

/// Equivalent to `anyhow::bail!` but for `PlayGraphError`
///
/// This macro allows early returns with custom error messages.
///
/// # Examples
///
/// ```rust
/// use playgraph_common::bail;
/// use playgraph_common::Result;
///
/// fn check_value(value: i32) -> Result<()> {
///     if value < 0 {
///         bail!("Value cannot be negative: {}", value);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::PlayGraphError::new($msg))
    };
    ($err:expr $(,)?) => {
        return Err($crate::PlayGraphError::new($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::PlayGraphError::new(format!($fmt, $($arg)*)))
    };
}

/// Equivalent to `anyhow::ensure!` but for `PlayGraphError`
///
/// This macro checks a condition and returns an error if it's false.
///
/// # Examples
///
/// ```rust
/// use playgraph_common::ensure;
/// use playgraph_common::Result;
///
/// fn validate_positive(value: i32) -> Result<()> {
///     ensure!(value > 0, "Value must be positive, got: {}", value);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::PlayGraphError::new($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($crate::PlayGraphError::new($err));
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::PlayGraphError::new(format!($fmt, $($arg)*)));
        }
    };
}
