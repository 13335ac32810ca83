use std::fmt::{Display, Formatter, Result as FmtResult};

/// Seconds left on a countdown, rendered as zero-padded `MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RemainingTime(i64);

impl RemainingTime {
    /// Creates a new [`RemainingTime`] from a second count.
    pub fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the raw second count, which may be negative once a countdown
    /// has been consumed.
    pub fn seconds(&self) -> i64 {
        self.0
    }
}

impl Display for RemainingTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let seconds = self.0.max(0);
        write!(f, "{:02}:{:02}", seconds / 60, seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_time_format() {
        assert_eq!(RemainingTime::new(0).to_string(), "00:00");
        assert_eq!(RemainingTime::new(2).to_string(), "00:02");
        assert_eq!(RemainingTime::new(59).to_string(), "00:59");
        assert_eq!(RemainingTime::new(60).to_string(), "01:00");
        assert_eq!(RemainingTime::new(125).to_string(), "02:05");
        assert_eq!(RemainingTime::new(3600).to_string(), "60:00");
    }

    #[test]
    fn remaining_time_negative_clamps_to_zero() {
        assert_eq!(RemainingTime::new(-1).to_string(), "00:00");
        assert_eq!(RemainingTime::new(-1).seconds(), -1);
    }
}
