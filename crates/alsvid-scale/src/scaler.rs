//! Time-dilation of whole pulse programs.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use alsvid_pulse::{Instruction, Schedule};

use crate::error::{ScaleError, ScaleResult};
use crate::quadrature::QuadConfig;
use crate::solve::{SolverConfig, scaled_amplitude};

/// Numeric configuration for a scaling pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Quadrature tolerances used for every area integration.
    pub quad: QuadConfig,
    /// Amplitude root-solve tolerances.
    pub solver: SolverConfig,
}

/// Stretches every playable pulse in a schedule while preserving its area,
/// then appends a calibrated measurement segment.
///
/// The measurement segment comes from the calibration layer and is appended
/// verbatim, shifted to start at the end of the longest scaled channel.
#[derive(Debug, Clone)]
pub struct ScheduleScaler {
    measurement: Schedule,
    config: ScaleConfig,
}

impl ScheduleScaler {
    /// Create a scaler around the calibration-provided measurement segment.
    pub fn new(measurement: Schedule) -> Self {
        Self {
            measurement,
            config: ScaleConfig::default(),
        }
    }

    /// Override the numeric configuration.
    #[must_use]
    pub fn with_config(mut self, config: ScaleConfig) -> Self {
        self.config = config;
        self
    }

    /// Scale `schedule` by `factor`, returning a new schedule.
    ///
    /// Play instructions with a solvable envelope are replaced by their
    /// stretched, amplitude-corrected counterparts and laid out back to back
    /// from time 0; plays with no solve implementation and all control
    /// instructions (delay, frame shift, acquire) pass through with their
    /// original start offsets. Re-timing pass-throughs after a
    /// variable-length stretch is the caller's concern.
    pub fn scale(&self, schedule: &Schedule, factor: f64) -> ScaleResult<Schedule> {
        // `!(x >= 1.0)` also rejects NaN.
        if !(factor >= 1.0) {
            return Err(ScaleError::InvalidScale(factor));
        }
        debug!(factor, entries = schedule.len(), "scaling schedule");

        let (scaled, end_offset) = schedule.entries().iter().try_fold(
            (Schedule::new(schedule.name()), 0.0_f64),
            |(mut out, offset), entry| -> ScaleResult<(Schedule, f64)> {
                let Some(envelope) = entry.instruction.as_play() else {
                    out.insert(entry.start, entry.instruction.clone());
                    return Ok((out, offset));
                };
                match scaled_amplitude(envelope, factor, &self.config.quad, &self.config.solver) {
                    Some(fit) => {
                        let stretched =
                            envelope.stretched(factor).with_amplitude(fit.amplitude)?;
                        let end = offset + stretched.duration();
                        out.insert(offset, Instruction::play(stretched, entry.instruction.channel));
                        Ok((out, end))
                    }
                    None => {
                        warn!(
                            family = envelope.family(),
                            channel = %entry.instruction.channel,
                            "no amplitude solve for this envelope family; passing through unscaled"
                        );
                        out.insert(entry.start, entry.instruction.clone());
                        Ok((out, offset))
                    }
                }
            },
        )?;

        let meas_start = scaled.stop_time();
        debug!(end_offset, meas_start, "appending measurement segment");
        Ok(scaled.appended(&self.measurement.shifted(meas_start)))
    }
}
