use std::fmt;

use chrono::{DateTime, FixedOffset, Local};

use crate::error::{Result, WaybackError};

/// Layout for parsing the wayback time from the command line.
///
/// Expects a date, a time and an explicit numeric UTC offset,
/// e.g. `2017-09-04 19:43:36 +0300`.
pub const LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";

/// The caller-supplied reference timestamp.
///
/// Selection picks the newest commit or tag whose committer time is
/// strictly before this point. Comparison is instant-based, so cutoffs
/// and commit times in different UTC offsets compare correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    when: DateTime<FixedOffset>,
}

impl Cutoff {
    /// Parse a cutoff from the fixed [LAYOUT]
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_layout(input, LAYOUT)
    }

    /// Parse a cutoff using a custom chrono layout
    pub fn parse_with_layout(input: &str, layout: &str) -> Result<Self> {
        let when = DateTime::parse_from_str(input, layout).map_err(|e| {
            WaybackError::time(format!(
                "cannot parse '{}' with layout '{}': {}",
                input, layout, e
            ))
        })?;
        Ok(Cutoff { when })
    }

    /// The wrapped timestamp
    pub fn when(&self) -> DateTime<FixedOffset> {
        self.when
    }

    /// Strict "before" predicate shared by both selection policies.
    ///
    /// A timestamp exactly equal to the cutoff is not admitted.
    pub fn admits(&self, when: DateTime<FixedOffset>) -> bool {
        when < self.when
    }

    /// The current local time formatted in the given layout, used to show
    /// the user a concrete example of well-formed input.
    pub fn now_formatted(layout: &str) -> String {
        Local::now().format(layout).to_string()
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.when.format(LAYOUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_str(s, LAYOUT).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let cutoff = Cutoff::parse("2017-09-04 19:43:36 +0300").unwrap();
        let expected = FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2017, 9, 4, 19, 43, 36)
            .unwrap();
        assert_eq!(cutoff.when(), expected);
    }

    #[test]
    fn test_parse_malformed() {
        let err = Cutoff::parse("not-a-date").unwrap_err();
        assert!(err.to_string().contains("Time parsing error"));
    }

    #[test]
    fn test_parse_missing_offset() {
        assert!(Cutoff::parse("2017-09-04 19:43:36").is_err());
    }

    #[test]
    fn test_admits_strictly_before() {
        let cutoff = Cutoff::parse("2017-09-04 00:00:00 +0000").unwrap();
        assert!(cutoff.admits(dt("2017-09-03 23:59:59 +0000")));
        assert!(!cutoff.admits(dt("2017-09-04 00:00:01 +0000")));
    }

    #[test]
    fn test_admits_equal_is_rejected() {
        let cutoff = Cutoff::parse("2017-09-04 12:00:00 +0000").unwrap();
        assert!(!cutoff.admits(dt("2017-09-04 12:00:00 +0000")));
    }

    #[test]
    fn test_admits_compares_instants_across_offsets() {
        // 12:00 +0200 is the same instant as 10:00 +0000
        let cutoff = Cutoff::parse("2017-09-04 12:00:00 +0200").unwrap();
        assert!(!cutoff.admits(dt("2017-09-04 10:00:00 +0000")));
        assert!(cutoff.admits(dt("2017-09-04 09:59:59 +0000")));
    }

    #[test]
    fn test_display_round_trip() {
        let cutoff = Cutoff::parse("2017-09-04 19:43:36 +0300").unwrap();
        assert_eq!(cutoff.to_string(), "2017-09-04 19:43:36 +0300");
    }
}
