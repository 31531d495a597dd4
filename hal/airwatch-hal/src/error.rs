//! Bus error types

use core::fmt;

/// Error from a two-wire bus operation
///
/// All bus implementations map their controller-specific failures to
/// these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Addressed device did not acknowledge (absent or rejecting)
    Nack,
    /// A status flag did not set within the wait budget
    Timeout,
    /// Bus error condition (misplaced start/stop)
    Bus,
    /// Lost arbitration to another master
    ArbitrationLost,
    /// Transaction length not supported (e.g. zero-byte read)
    InvalidLength,
    /// Other controller-specific failure
    Other,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::Nack => write!(f, "device did not acknowledge"),
            BusError::Timeout => write!(f, "bus wait timed out"),
            BusError::Bus => write!(f, "bus error"),
            BusError::ArbitrationLost => write!(f, "arbitration lost"),
            BusError::InvalidLength => write!(f, "invalid transaction length"),
            BusError::Other => write!(f, "bus failure"),
        }
    }
}
