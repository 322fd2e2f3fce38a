//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
///
/// Used for the completion time of finished checklists.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let ts = Timestamp::from_second(1640995200).unwrap();
        let output = LocalDateTime(&ts).to_string();
        // Date part depends on the system zone, the layout does not.
        let parts: Vec<&str> = output.split(' ').collect();
        assert!(parts.len() >= 3, "unexpected format: {output}");
        assert_eq!(parts[0].len(), 10);
        assert_eq!(parts[1].len(), 8);
    }
}
