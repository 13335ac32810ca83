use snafu::prelude::*;

/// The largest duration in minutes whose second count still fits in the
/// timer's signed counter.
const MAX_MINUTES: u64 = (i64::MAX / 60) as u64;

/// The time allotted for a quiz. Specified in minutes, counted in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuizDuration(i64);

impl QuizDuration {
    /// Try to create a [`QuizDuration`] from a duration in minutes.
    ///
    /// # Errors
    ///
    /// This function will return an error if the minute count does not fit
    /// in the internal second counter.
    pub fn try_new(minutes: u64) -> Result<Self, TryNewQuizDurationError> {
        ensure!(minutes <= MAX_MINUTES, TooLongSnafu);
        Ok(Self(minutes as i64 * 60))
    }

    /// Total seconds on the clock when the countdown begins.
    pub fn total_seconds(&self) -> i64 {
        self.0
    }
}

impl TryFrom<u64> for QuizDuration {
    type Error = TryNewQuizDurationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`QuizDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewQuizDurationError {
    #[snafu(display("Duration in minutes is too long to count in seconds"))]
    #[non_exhaustive]
    TooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_duration_try_new() {
        assert_eq!(QuizDuration::try_new(1), Ok(QuizDuration(60)));
        assert_eq!(QuizDuration::try_new(0), Ok(QuizDuration(0)));
        assert_eq!(
            QuizDuration::try_new(u64::MAX),
            Err(TryNewQuizDurationError::TooLong),
        );
    }

    #[test]
    fn quiz_duration_total_seconds() {
        assert_eq!(QuizDuration::try_new(30).unwrap().total_seconds(), 1800);
    }

    #[test]
    fn quiz_duration_try_from() {
        assert_eq!(5.try_into(), Ok(QuizDuration(300)));
    }
}
