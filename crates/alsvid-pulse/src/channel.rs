//! Hardware channels addressed by pulse instructions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named channel on the control electronics.
///
/// The index ties the channel to a physical qubit (drive, measure, acquire)
/// or to a coupler line (control).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    /// Qubit drive line.
    Drive(u32),
    /// Coupler / cross-resonance control line.
    Control(u32),
    /// Readout stimulus line.
    Measure(u32),
    /// Readout capture channel.
    Acquire(u32),
}

impl Channel {
    /// The hardware index of this channel.
    pub fn index(&self) -> u32 {
        match self {
            Channel::Drive(i) | Channel::Control(i) | Channel::Measure(i) | Channel::Acquire(i) => {
                *i
            }
        }
    }

    /// True for channels that carry shaped stimulus waveforms.
    pub fn is_pulsed(&self) -> bool {
        !matches!(self, Channel::Acquire(_))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Drive(i) => write!(f, "d{i}"),
            Channel::Control(i) => write!(f, "u{i}"),
            Channel::Measure(i) => write!(f, "m{i}"),
            Channel::Acquire(i) => write!(f, "a{i}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Channel::Drive(0).to_string(), "d0");
        assert_eq!(Channel::Control(1).to_string(), "u1");
        assert_eq!(Channel::Measure(2).to_string(), "m2");
        assert_eq!(Channel::Acquire(3).to_string(), "a3");
    }

    #[test]
    fn test_pulsed_channels() {
        assert!(Channel::Drive(0).is_pulsed());
        assert!(Channel::Measure(0).is_pulsed());
        assert!(!Channel::Acquire(0).is_pulsed());
        assert_eq!(Channel::Control(7).index(), 7);
    }
}
