//! Retry configuration for [`Task`](super::Task).

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How long to wait between a failed attempt and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Backoff {
    /// Retry immediately.
    #[default]
    None,
    /// Wait the same duration before every retry.
    Fixed(Duration),
    /// Wait `initial`, then `initial * factor`, then `initial * factor^2`, ...
    Multiplicative {
        /// Delay before the first retry.
        initial: Duration,
        /// Growth factor applied after each further failure.
        factor: u32,
    },
}

impl Backoff {
    /// The delay after the `failures`-th consecutive failed attempt (1-based).
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use contextual::effect::Backoff;
    ///
    /// let backoff = Backoff::Multiplicative { initial: Duration::from_millis(10), factor: 3 };
    /// assert_eq!(backoff.delay_after(1), Duration::from_millis(10));
    /// assert_eq!(backoff.delay_after(3), Duration::from_millis(90));
    /// ```
    pub fn delay_after(&self, failures: u32) -> Duration {
        match *self {
            Self::None => Duration::ZERO,
            Self::Fixed(delay) => delay,
            Self::Multiplicative { initial, factor } => {
                let exponent = failures.saturating_sub(1);
                initial.saturating_mul(factor.saturating_pow(exponent))
            }
        }
    }
}

/// How many times a task is attempted and how long to wait in between.
///
/// `max_attempts` counts every invocation including the first, so
/// `RetryPolicy::new(3)` runs the body at most three times. A value of zero is
/// treated as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetryPolicy {
    /// Total attempts, the first one included.
    pub max_attempts: u32,
    /// Delay schedule between attempts.
    pub backoff: Backoff,
}

impl RetryPolicy {
    /// Up to `max_attempts` attempts with no delay.
    pub const fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::None,
        }
    }

    /// Replaces the backoff.
    #[must_use]
    pub const fn with_backoff(self, backoff: Backoff) -> Self {
        Self { backoff, ..self }
    }

    /// Up to `max_attempts` attempts, waiting `delay` between them.
    pub const fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self::new(max_attempts).with_backoff(Backoff::Fixed(delay))
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const DOUBLING: Backoff = Backoff::Multiplicative {
        initial: Duration::from_millis(5),
        factor: 2,
    };

    #[rstest]
    #[case(Backoff::None, 4, Duration::ZERO)]
    #[case(Backoff::Fixed(Duration::from_millis(25)), 1, Duration::from_millis(25))]
    #[case(Backoff::Fixed(Duration::from_millis(25)), 9, Duration::from_millis(25))]
    #[case(DOUBLING, 1, Duration::from_millis(5))]
    #[case(DOUBLING, 4, Duration::from_millis(40))]
    fn delay_after_failures(
        #[case] backoff: Backoff,
        #[case] failures: u32,
        #[case] expected: Duration,
    ) {
        assert_eq!(backoff.delay_after(failures), expected);
    }

    #[rstest]
    fn huge_exponent_saturates_instead_of_overflowing() {
        let backoff = Backoff::Multiplicative {
            initial: Duration::from_secs(1),
            factor: 10,
        };
        assert_eq!(backoff.delay_after(u32::MAX), Duration::from_secs(u64::from(u32::MAX)));
    }

    #[rstest]
    fn zero_attempts_still_runs_once() {
        assert_eq!(RetryPolicy::new(0).attempts(), 1);
        assert_eq!(RetryPolicy::default().attempts(), 1);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn policy_reads_from_partial_config() {
        let policy: RetryPolicy =
            serde_json::from_str(r#"{"max_attempts": 4}"#).expect("valid policy");
        assert_eq!(policy, RetryPolicy::new(4));
    }
}
