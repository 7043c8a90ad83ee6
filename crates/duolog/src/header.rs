//! crates/duolog/src/header.rs
//! Pure rendering of the configurable line prefix.

use std::fmt::Write as _;

use time::{OffsetDateTime, UtcOffset};

use crate::flags::LogFlags;
use crate::location::SourceLocation;

/// Renders the prefix selected by `flags` for one log line.
///
/// The function is pure: no locks, no I/O, deterministic for a given input.
/// An empty flag set renders an empty string, as does a set containing only
/// `UTC` (the bit qualifies date and time segments but prints nothing by
/// itself).
///
/// Field layout follows the documented format exactly: date as `Y/M/D` with
/// non-zero-padded month and day, time as `H:M:S` with non-zero-padded
/// fields, microseconds as a `.` followed by the non-padded microsecond
/// value, and the caller location as `file:line`. Each rendered segment ends
/// with a single space so the severity tag can follow directly.
///
/// # Examples
///
/// ```
/// use duolog::{format_header, LogFlags, SourceLocation};
/// use time::macros::datetime;
///
/// let location = SourceLocation::new("crates/app/src/main.rs", 23);
/// let timestamp = datetime!(2009-01-23 01:23:23.123123 UTC);
///
/// let header = format_header(
///     LogFlags::DATE | LogFlags::TIME | LogFlags::SHORT_FILE,
///     &location,
///     timestamp,
/// );
///
/// assert_eq!(header, "2009/1/23 1:23:23 main.rs:23 ");
/// assert_eq!(format_header(LogFlags::NONE, &location, timestamp), "");
/// ```
#[must_use]
pub fn format_header(
    flags: LogFlags,
    location: &SourceLocation,
    timestamp: OffsetDateTime,
) -> String {
    if flags.is_empty() {
        return String::new();
    }

    let timestamp = if flags.contains(LogFlags::UTC) {
        timestamp.to_offset(UtcOffset::UTC)
    } else {
        timestamp
    };

    let mut header = String::new();

    if flags.intersects(LogFlags::DATE | LogFlags::TIME | LogFlags::MICROSECONDS) {
        let _ = write!(
            header,
            "{}/{}/{} ",
            timestamp.year(),
            u8::from(timestamp.month()),
            timestamp.day()
        );

        if flags.contains(LogFlags::TIME) {
            let _ = write!(
                header,
                "{}:{}:{}",
                timestamp.hour(),
                timestamp.minute(),
                timestamp.second()
            );
            if flags.contains(LogFlags::MICROSECONDS) {
                let _ = write!(header, ".{}", timestamp.microsecond());
            }
            header.push(' ');
        }
    }

    if flags.intersects(LogFlags::SHORT_FILE | LogFlags::LONG_FILE) {
        let file = if flags.contains(LogFlags::SHORT_FILE) {
            location.short_file()
        } else {
            location.file()
        };
        let _ = write!(header, "{}:{} ", file, location.line());
    }

    header
}
