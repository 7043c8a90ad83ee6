//! crates/duolog/src/macros.rs
//! Formatted logging macros targeting the default logger.

/// Logs a formatted message at info level through the default logger.
///
/// Accepts standard [`format_args!`] syntax and records the macro call site
/// as the line's source location.
///
/// # Examples
///
/// ```
/// duolog::set_flags(duolog::LogFlags::NONE);
/// duolog::info!("Hello {}!", "World");
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::default_logger().info_at(
            $crate::SourceLocation::new(file!(), line!()),
            ::core::format_args!($($arg)*),
        )
    };
}

/// Logs a formatted message at debug level through the default logger.
///
/// A complete no-op while the debug toggle is off: the arguments are never
/// formatted and the sink is never touched.
///
/// # Examples
///
/// ```
/// duolog::set_flags(duolog::LogFlags::NONE);
/// duolog::set_debug(true);
/// duolog::debug!("ran for {} seconds.", 1);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::default_logger().debug_enabled() {
            $crate::default_logger().debug_at(
                $crate::SourceLocation::new(file!(), line!()),
                ::core::format_args!($($arg)*),
            );
        }
    };
}
