//! Deadline for bounded bridge requests.

use std::time::Duration;

use crate::error::{Error, Result};

/// Deadline applied by the bounded request operations.
///
/// # Valid Range
///
/// - Minimum: 1 millisecond (a zero deadline would fail every request)
/// - Maximum: 1 hour
///
/// The unbounded operations never consult this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(Duration);

impl RequestTimeout {
    const MIN: Duration = Duration::from_millis(1);
    const MAX: Duration = Duration::from_secs(60 * 60);

    /// Create a new RequestTimeout with validation.
    ///
    /// Returns `Error::Config` if `duration` is outside `1ms..=1h`.
    pub fn new(duration: Duration) -> Result<Self> {
        if duration < Self::MIN {
            return Err(Error::config(format!(
                "Request timeout must be at least {:?}, got {:?}",
                Self::MIN,
                duration
            )));
        }
        if duration > Self::MAX {
            return Err(Error::config(format!(
                "Request timeout must be at most {:?}, got {:?}",
                Self::MAX,
                duration
            )));
        }
        Ok(Self(duration))
    }

    /// Create a RequestTimeout from a millisecond count.
    pub fn from_millis(millis: u64) -> Result<Self> {
        Self::new(Duration::from_millis(millis))
    }

    /// Get the inner Duration value.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}
