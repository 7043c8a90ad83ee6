//! crates/duolog/src/flags.rs
//! Prefix flag bit-set controlling which header segments each line carries.

use bitflags::bitflags;

bitflags! {
    /// Flags selecting the prefix text rendered in front of each log line.
    ///
    /// Flags are or'ed together to control what is printed. There is no
    /// control over the order the segments appear (the order listed here) or
    /// the format they present. For example, `DATE | TIME` produces
    ///
    /// ```text
    /// 2009/1/23 1:23:23 message
    /// ```
    ///
    /// while `DATE | TIME | MICROSECONDS | LONG_FILE` produces
    ///
    /// ```text
    /// 2009/1/23 1:23:23.123123 crates/duolog/src/logger.rs:23 message
    /// ```
    ///
    /// The bit values are stable and part of the public contract.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LogFlags: u32 {
        /// The date: `2009/1/23`.
        const DATE = 1;
        /// The time: `1:23:23`.
        const TIME = 1 << 1;
        /// Microsecond resolution: `1:23:23.123123`. Assumes `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Full file path and line number: `crates/duolog/src/logger.rs:23`.
        const LONG_FILE = 1 << 3;
        /// Final file path element and line number: `logger.rs:23`.
        /// Overrides `LONG_FILE`.
        const SHORT_FILE = 1 << 4;
        /// If `DATE` or `TIME` is set, use UTC rather than the local time
        /// zone.
        const UTC = 1 << 5;
        /// Initial flag set for the default logger.
        const STD = Self::DATE.bits() | Self::TIME.bits() | Self::UTC.bits() | Self::LONG_FILE.bits();
    }
}

impl LogFlags {
    /// The empty flag set: lines carry no prefix at all.
    pub const NONE: Self = Self::empty();
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn flags_round_trip_through_json() {
        let flags = LogFlags::DATE | LogFlags::TIME;
        let json = serde_json::to_string(&flags).expect("flags serialize");
        let back: LogFlags = serde_json::from_str(&json).expect("flags deserialize");
        assert_eq!(back, flags);
    }

    #[test]
    fn serialized_form_names_the_flags() {
        let json = serde_json::to_string(&(LogFlags::DATE | LogFlags::UTC)).expect("serialize");
        assert!(json.contains("DATE"));
        assert!(json.contains("UTC"));
    }
}
