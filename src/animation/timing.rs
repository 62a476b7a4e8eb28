//! Timing configuration for the step programs, with TOML preset support.
//!
//! Every delay, pause, increment, and pulse duration used by the program
//! builders lives here so presets can retune the pacing without touching
//! the scripts. `#[serde(default)]` lets a partial TOML file override a
//! single value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::scene::SCALE_MAX;

/// Pacing constants for the scenario's animation programs.
///
/// Durations are in milliseconds; increments are per-tick fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Exposure: delay before the zero-day node is revealed.
    pub vuln_reveal_ms: u64,
    /// Exposure: delay before the sentence switch.
    pub exposure_sentence_ms: u64,
    /// Exposure: lead-in from the sentence switch to the first line ramp.
    pub exposure_line_lead_ms: u64,
    /// Exposure: gap between the exploit line and the breach line ramps.
    pub exposure_line_gap_ms: u64,
    /// Intrusion: delay before the first attack segment starts.
    pub intrusion_start_ms: u64,
    /// Intrusion: pause at each node after a segment completes.
    pub segment_pause_ms: u64,
    /// Sentence switch delay for the intrusion and detection steps.
    pub sentence_switch_ms: u64,
    /// Triage: delay before the analyst and sensor glow pop in.
    pub popin_delay_ms: u64,
    /// Triage: further delay before the triage line is revealed.
    pub triage_line_delay_ms: u64,
    /// Triage: pause before the triage line fades out.
    pub triage_fade_pause_ms: u64,
    /// Containment: delay before the response line is revealed.
    pub response_start_ms: u64,
    /// Containment: pause before the response line fades out.
    pub response_fade_pause_ms: u64,
    /// Containment: gap before the red overlay fade.
    pub red_fade_gap_ms: u64,
    /// Containment: gap before the scale pulse.
    pub pulse_gap_ms: u64,
    /// Containment: duration of the pulse growth stage.
    pub pulse_grow_ms: u64,
    /// Containment: duration of the pulse shrink stage.
    pub pulse_shrink_ms: u64,
    /// Per-tick increment for line growth ramps.
    pub line_step: f32,
    /// Per-tick increment for the slower containment response line.
    pub slow_line_step: f32,
    /// Per-tick decrement for opacity fades.
    pub fade_step: f32,
    /// Peak scale reached by the pulse growth stage.
    pub scale_peak: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            vuln_reveal_ms: 200,
            exposure_sentence_ms: 3500,
            exposure_line_lead_ms: 200,
            exposure_line_gap_ms: 200,
            intrusion_start_ms: 600,
            segment_pause_ms: 400,
            sentence_switch_ms: 2200,
            popin_delay_ms: 300,
            triage_line_delay_ms: 800,
            triage_fade_pause_ms: 2000,
            response_start_ms: 300,
            response_fade_pause_ms: 2000,
            red_fade_gap_ms: 200,
            pulse_gap_ms: 1200,
            pulse_grow_ms: 500,
            pulse_shrink_ms: 1000,
            line_step: 0.04,
            slow_line_step: 0.018,
            fade_step: 0.04,
            scale_peak: 1.5,
        }
    }
}

impl Timing {
    /// Load timing from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML does not
    /// parse, or a value is outside its valid range.
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let content = std::fs::read_to_string(path).map_err(BoardError::Io)?;
        let timing: Self = toml::from_str(&content)
            .map_err(|e| BoardError::TimingParse(e.to_string()))?;
        timing.validate()?;
        Ok(timing)
    }

    /// Save timing to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), BoardError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BoardError::TimingParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BoardError::Io)?;
        }
        std::fs::write(path, content).map_err(BoardError::Io)
    }

    /// Check every value against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Timing`] naming the first offending value.
    pub fn validate(&self) -> Result<(), BoardError> {
        for (name, step) in [
            ("line_step", self.line_step),
            ("slow_line_step", self.slow_line_step),
            ("fade_step", self.fade_step),
        ] {
            if !(step > 0.0 && step <= 1.0) {
                return Err(BoardError::Timing(format!(
                    "{name} must be in (0, 1], got {step}"
                )));
            }
        }
        if !(1.0..=SCALE_MAX).contains(&self.scale_peak) {
            return Err(BoardError::Timing(format!(
                "scale_peak must be in [1, {SCALE_MAX}], got {}",
                self.scale_peak
            )));
        }
        if self.pulse_grow_ms == 0 || self.pulse_shrink_ms == 0 {
            return Err(BoardError::Timing(
                "pulse durations must be non-zero".to_owned(),
            ));
        }
        Ok(())
    }
}
