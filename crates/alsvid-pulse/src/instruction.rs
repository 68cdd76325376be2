//! Schedule instructions combining an operation with its channel.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::envelope::Envelope;

/// The kind of operation an instruction performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// Play a shaped envelope on a pulsed channel.
    Play(Envelope),
    /// Idle the channel for a fixed span.
    Delay {
        /// Idle length in device time units.
        duration: f64,
    },
    /// Rotate the channel's software frame (virtual-Z).
    ShiftPhase {
        /// Phase shift in radians.
        phase: f64,
    },
    /// Capture readout data.
    Acquire {
        /// Capture window in device time units.
        duration: f64,
    },
}

/// A complete instruction placed on one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// What to do.
    pub kind: InstructionKind,
    /// Where to do it.
    pub channel: Channel,
}

impl Instruction {
    /// Create a play instruction.
    pub fn play(envelope: Envelope, channel: Channel) -> Self {
        Self {
            kind: InstructionKind::Play(envelope),
            channel,
        }
    }

    /// Create a delay instruction.
    pub fn delay(duration: f64, channel: Channel) -> Self {
        Self {
            kind: InstructionKind::Delay { duration },
            channel,
        }
    }

    /// Create a frame-rotation instruction.
    pub fn shift_phase(phase: f64, channel: Channel) -> Self {
        Self {
            kind: InstructionKind::ShiftPhase { phase },
            channel,
        }
    }

    /// Create an acquire instruction.
    pub fn acquire(duration: f64, channel: Channel) -> Self {
        Self {
            kind: InstructionKind::Acquire { duration },
            channel,
        }
    }

    /// How long this instruction occupies its channel.
    ///
    /// Frame rotations are instantaneous.
    pub fn duration(&self) -> f64 {
        match &self.kind {
            InstructionKind::Play(envelope) => envelope.duration(),
            InstructionKind::Delay { duration } | InstructionKind::Acquire { duration } => {
                *duration
            }
            InstructionKind::ShiftPhase { .. } => 0.0,
        }
    }

    /// Check if this is a play instruction.
    pub fn is_play(&self) -> bool {
        matches!(self.kind, InstructionKind::Play(_))
    }

    /// Check if this is an acquire instruction.
    pub fn is_acquire(&self) -> bool {
        matches!(self.kind, InstructionKind::Acquire { .. })
    }

    /// Get the envelope if this is a play instruction.
    pub fn as_play(&self) -> Option<&Envelope> {
        match &self.kind {
            InstructionKind::Play(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Play(_) => "play",
            InstructionKind::Delay { .. } => "delay",
            InstructionKind::ShiftPhase { .. } => "shift_phase",
            InstructionKind::Acquire { .. } => "acquire",
        }
    }
}
