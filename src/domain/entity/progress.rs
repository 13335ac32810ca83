use snafu::prelude::*;

/// How much of a lecture video has been watched, as a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgressPercent(u8);

impl ProgressPercent {
    /// Try to create a [`ProgressPercent`] from a raw percentage.
    ///
    /// # Errors
    ///
    /// This function will return an error if the value exceeds 100.
    pub fn try_new(value: u8) -> Result<Self, TryNewProgressPercentError> {
        ensure!(value <= 100, OutOfRangeSnafu);
        Ok(Self(value))
    }

    /// Returns the raw percentage.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ProgressPercent {
    type Error = TryNewProgressPercentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`ProgressPercent`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewProgressPercentError {
    #[snafu(display("Progress percentage must not exceed 100"))]
    #[non_exhaustive]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_percent_try_new() {
        assert_eq!(ProgressPercent::try_new(0), Ok(ProgressPercent(0)));
        assert_eq!(ProgressPercent::try_new(100), Ok(ProgressPercent(100)));
        assert_eq!(
            ProgressPercent::try_new(101),
            Err(TryNewProgressPercentError::OutOfRange),
        );
    }

    #[test]
    fn progress_percent_value() {
        assert_eq!(ProgressPercent::try_new(42).unwrap().value(), 42);
    }
}
