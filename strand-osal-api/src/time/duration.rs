//! This module implements a [`Duration`] with millisecond precision.

use core::fmt;
use core::num::TryFromIntError;
use core::ops::{Add, Sub};

/// Duration represents a span of time.
///
/// Negative durations are not supported. Millisecond precision matches the granularity of the native sleep
/// primitives this layer abstracts over; sub-millisecond fractions are not representable.
#[derive(
    Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Duration {
    millis: u64,
}

impl Duration {
    /// The largest value that can be represented by the `Duration` type.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::MAX, Duration::from_millis(u64::MAX));
    /// ```
    pub const MAX: Duration = Duration { millis: u64::MAX };

    /// A duration of zero time.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::ZERO, Duration::from_millis(0));
    /// ```
    pub const ZERO: Duration = Duration { millis: 0 };

    /// Factor of milliseconds per second.
    const MILLIS_PER_SECOND: u64 = 1_000;

    /// Creates a duration from the specified number of seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_secs(1), Duration::from_millis(1000));
    /// ```
    pub const fn from_secs(secs: u64) -> Duration {
        Duration {
            millis: secs * Self::MILLIS_PER_SECOND,
        }
    }

    /// Creates a duration from the specified number of milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_millis(1500).as_secs(), 1);
    /// ```
    pub const fn from_millis(millis: u64) -> Duration {
        Duration { millis }
    }

    /// Returns the total amount of seconds, rounded down.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_millis(1980).as_secs(), 1);
    /// ```
    pub const fn as_secs(&self) -> u64 {
        self.millis / Self::MILLIS_PER_SECOND
    }

    /// Returns the total amount of milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_secs(2).as_millis(), 2000);
    /// ```
    pub const fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Returns the fractional part of the duration in whole milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_millis(1980).subsec_millis(), 980);
    /// ```
    pub const fn subsec_millis(&self) -> u64 {
        self.millis % Self::MILLIS_PER_SECOND
    }

    /// Adds one Duration to another, returning a new Duration or None in the event of an overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(
    ///     Duration::from_secs(1).checked_add(Duration::from_secs(1)),
    ///     Some(Duration::from_secs(2))
    /// );
    /// assert_eq!(Duration::MAX.checked_add(Duration::from_secs(1)), None);
    /// ```
    pub fn checked_add(self, rhs: Duration) -> Option<Duration> {
        self.millis
            .checked_add(rhs.millis)
            .map(|millis| Duration { millis })
    }

    /// Subtracts one Duration from another, returning a new Duration or None in the event of an underflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(
    ///     Duration::from_secs(2).checked_sub(Duration::from_secs(1)),
    ///     Some(Duration::from_secs(1))
    /// );
    /// assert_eq!(Duration::from_secs(1).checked_sub(Duration::from_secs(2)), None);
    /// ```
    pub fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        self.millis
            .checked_sub(rhs.millis)
            .map(|millis| Duration { millis })
    }
}

impl Add for Duration {
    type Output = Self;

    /// # Panics
    ///
    /// This function may panic if the resulting duration overflows. See [`Duration::checked_add`] for a version
    /// without panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_secs(1) + Duration::from_secs(1), Duration::from_secs(2));
    /// ```
    ///
    /// ```should_panic
    /// use strand_osal_api::time::Duration;
    ///
    /// let _ = Duration::MAX + Duration::from_secs(1);
    /// ```
    fn add(self, rhs: Self) -> Self::Output {
        let Some(result) = self.checked_add(rhs) else {
            panic!("overflow when adding two durations");
        };

        result
    }
}

impl Sub for Duration {
    type Output = Self;

    /// # Panics
    ///
    /// This function may panic if the resulting duration underflows. See [`Duration::checked_sub`] for a
    /// version without panic.
    ///
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::from_secs(2) - Duration::from_secs(1), Duration::from_secs(1));
    /// ```
    ///
    /// ```should_panic
    /// use strand_osal_api::time::Duration;
    ///
    /// let _ = Duration::from_secs(1) - Duration::from_secs(2);
    /// ```
    fn sub(self, rhs: Self) -> Self::Output {
        let Some(result) = self.checked_sub(rhs) else {
            panic!("underflow when subtracting two durations");
        };

        result
    }
}

impl fmt::Debug for Duration {
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// let duration = Duration::from_millis(1980);
    /// assert_eq!(format!("{duration:?}"), "1s.980ms");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}s.{}ms", self.as_secs(), self.subsec_millis())
    }
}

impl TryFrom<core::time::Duration> for Duration {
    type Error = TryFromIntError;

    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(Duration::try_from(core::time::Duration::from_secs(1)), Ok(Duration::from_secs(1)));
    /// ```
    fn try_from(value: core::time::Duration) -> Result<Self, Self::Error> {
        value.as_millis().try_into().map(Self::from_millis)
    }
}

impl From<Duration> for core::time::Duration {
    /// # Examples
    ///
    /// ```
    /// use strand_osal_api::time::Duration;
    ///
    /// assert_eq!(
    ///     core::time::Duration::from(Duration::from_secs(1)),
    ///     core::time::Duration::from_secs(1)
    /// );
    /// ```
    fn from(value: Duration) -> Self {
        Self::from_millis(value.as_millis())
    }
}
