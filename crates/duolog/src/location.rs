//! crates/duolog/src/location.rs
//! Source file and line number of the code that invoked a logging call.

use std::fmt;
use std::panic::Location;

/// Source location attached to a log line when file prefixing is enabled.
///
/// Locations are captured for free on the public logging methods via
/// [`caller`](Self::caller); integrations that resolve call sites themselves
/// (macros, the tracing bridge) construct one from explicit `file!()` /
/// `line!()` values. When no call site can be resolved at all,
/// [`unknown`](Self::unknown) stands in and renders as `???:0`.
///
/// # Examples
///
/// ```
/// use duolog::SourceLocation;
///
/// let location = SourceLocation::new("crates/app/src/main.rs", 42);
///
/// assert_eq!(location.to_string(), "crates/app/src/main.rs:42");
/// assert_eq!(location.short_file(), "main.rs");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from an explicit file path and line number.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Captures the location of the calling code.
    ///
    /// `#[track_caller]` propagation means a chain of annotated helpers
    /// reports the outermost un-annotated caller, which is how the logger
    /// attributes lines to user code rather than its own emit path.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    /// Placeholder for call sites that could not be resolved.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::new("???", 0)
    }

    /// Returns the recorded file path.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the recorded line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the final path element, the view `SHORT_FILE` renders.
    #[must_use]
    pub fn short_file(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
