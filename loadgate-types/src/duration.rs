//! Dwell durations: the serialized millisecond form and the text form used in
//! configuration files and on the command line.

use std::time::Duration;

use thiserror::Error;

/// Duration in milliseconds.
///
/// Dwell times and transition offsets are all human-scale, so milliseconds
/// are the canonical unit whenever a duration is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Milliseconds(pub u64);

impl Milliseconds {
    /// Create from milliseconds.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Create from seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    /// Get the value in milliseconds.
    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Convert to a standard Duration.
    pub const fn to_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl From<Duration> for Milliseconds {
    fn from(d: Duration) -> Self {
        Self(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl From<Milliseconds> for Duration {
    fn from(m: Milliseconds) -> Self {
        Duration::from_millis(m.0)
    }
}

/// Errors produced while parsing a dwell duration string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DurationError {
    /// The input was empty or only whitespace.
    #[error("empty duration")]
    Empty,

    /// The numeric part could not be parsed.
    #[error("invalid number in duration: {0:?}")]
    InvalidNumber(String),

    /// Negative, NaN, infinite or too large to represent.
    #[error("duration out of range: {0:?}")]
    OutOfRange(String),
}

/// Suffix to nanoseconds multiplier (longer suffixes first).
const UNITS: &[(&str, u64)] = &[
    ("ns", 1),
    ("µs", 1_000),
    ("us", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
];

/// Parse a dwell duration like `"3000ms"`, `"3s"`, `"1.5s"` or `"250us"`.
///
/// A bare number without a suffix is read as milliseconds, which is the unit
/// dwell times are usually quoted in.
pub fn parse_dwell(s: &str) -> Result<Duration, DurationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DurationError::Empty);
    }

    let (number, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, mult)| s.strip_suffix(suffix).map(|n| (n.trim(), *mult)))
        .unwrap_or((s, 1_000_000));

    if let Ok(whole) = number.parse::<u64>() {
        return whole
            .checked_mul(multiplier)
            .map(Duration::from_nanos)
            .ok_or_else(|| DurationError::OutOfRange(s.to_string()));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| DurationError::InvalidNumber(s.to_string()))?;
    let nanos = (value * multiplier as f64).round();
    if !nanos.is_finite() || nanos < 0.0 || nanos >= u64::MAX as f64 {
        return Err(DurationError::OutOfRange(s.to_string()));
    }

    Ok(Duration::from_nanos(nanos as u64))
}

/// Format a dwell duration for display.
pub fn format_dwell(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        "0ms".to_string()
    } else if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        if nanos % 1_000_000 == 0 {
            format!("{}ms", d.as_millis())
        } else {
            format!("{:.2}ms", nanos as f64 / 1_000_000.0)
        }
    } else if nanos % 1_000_000_000 == 0 {
        format!("{}s", d.as_secs())
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let d = Duration::from_millis(1500);
        let m = Milliseconds::from(d);
        assert_eq!(m.as_millis(), 1500);

        let d2: Duration = m.into();
        assert_eq!(d, d2);
    }

    #[test]
    fn from_secs() {
        let m = Milliseconds::from_secs(3);
        assert_eq!(m.as_millis(), 3000);
        assert_eq!(m.to_duration(), Duration::from_secs(3));
    }

    #[test]
    fn sub_millisecond_truncates() {
        let m = Milliseconds::from(Duration::from_micros(2_999_999));
        assert_eq!(m.as_millis(), 2999);
    }

    #[test]
    fn parse_milliseconds() {
        assert_eq!(parse_dwell("3000ms").unwrap(), Duration::from_millis(3000));
    }

    #[test]
    fn parse_seconds() {
        assert_eq!(parse_dwell("3s").unwrap(), Duration::from_secs(3));
        assert_eq!(parse_dwell("1.5s").unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn parse_small_units() {
        assert_eq!(parse_dwell("16µs").unwrap(), Duration::from_micros(16));
        assert_eq!(parse_dwell("16us").unwrap(), Duration::from_micros(16));
        assert_eq!(parse_dwell("250ns").unwrap(), Duration::from_nanos(250));
    }

    #[test]
    fn bare_number_is_milliseconds() {
        assert_eq!(parse_dwell("750").unwrap(), Duration::from_millis(750));
        assert_eq!(parse_dwell(" 750 ").unwrap(), Duration::from_millis(750));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_dwell(""), Err(DurationError::Empty));
        assert!(matches!(
            parse_dwell("soon"),
            Err(DurationError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_dwell("-5ms"),
            Err(DurationError::OutOfRange(_))
        ));
    }

    #[test]
    fn parse_rejects_overflow() {
        for input in ["1e30s", "18446744074s", "18446744073709551615ms", "1e400"] {
            assert!(
                matches!(parse_dwell(input), Err(DurationError::OutOfRange(_))),
                "{input} should be out of range"
            );
        }
    }

    #[test]
    fn large_integers_are_exact() {
        assert_eq!(
            parse_dwell("9007199254741ms").unwrap(),
            Duration::from_millis(9_007_199_254_741)
        );
        assert_eq!(
            parse_dwell("18446744073709551615ns").unwrap(),
            Duration::from_nanos(u64::MAX)
        );
    }

    #[test]
    fn conversions_saturate() {
        assert_eq!(Milliseconds::from_secs(u64::MAX), Milliseconds(u64::MAX));
        assert_eq!(Milliseconds::from(Duration::MAX), Milliseconds(u64::MAX));
    }

    #[test]
    fn format_round_numbers() {
        assert_eq!(format_dwell(Duration::ZERO), "0ms");
        assert_eq!(format_dwell(Duration::from_millis(500)), "500ms");
        assert_eq!(format_dwell(Duration::from_secs(3)), "3s");
        assert_eq!(format_dwell(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn format_then_parse_keeps_value() {
        for d in [Duration::from_millis(250), Duration::from_secs(3)] {
            assert_eq!(parse_dwell(&format_dwell(d)).unwrap(), d);
        }
    }
}
