//! Step programs as data: typed phases interpreted by a generic runner.
//!
//! Each scenario step's animation script is a set of parallel tracks, each
//! track an ordered phase list. A later phase never starts before its
//! predecessor completes, so the nested-callback chains of an ad-hoc timer
//! script become a flat, cancellable description.

use web_time::Duration;

use crate::animation::ramp::{FixedRamp, TimedRamp};
use crate::scene::{BoolField, NodeId, ScalarField, SceneState};

/// Instantaneous scene mutation, applied the moment its phase is reached.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set a visibility flag.
    SetFlag(BoolField, bool),
    /// Commit a scalar value directly (clamped by the scene).
    SetScalar(ScalarField, f32),
    /// Switch the visible narrative sentence.
    ShowSentence(usize),
    /// Add nodes to the compromised set.
    MarkCompromised(&'static [NodeId]),
}

impl Effect {
    /// Apply this effect to the scene.
    pub fn apply(&self, scene: &mut SceneState) {
        match self {
            Self::SetFlag(field, value) => scene.set_flag(*field, *value),
            Self::SetScalar(field, value) => {
                scene.set_scalar(*field, *value);
            }
            Self::ShowSentence(index) => scene.show_sentence(*index),
            Self::MarkCompromised(nodes) => scene.mark_compromised(nodes),
        }
    }
}

/// One ordered unit of a step's animation program.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Wait for a wall-clock delay, armed when the phase is reached.
    Delay(Duration),
    /// Fixed-increment ramp; completes at its bound.
    Ramp(FixedRamp),
    /// Elapsed-time ramp; completes at its duration.
    Timed(TimedRamp),
    /// Instantaneous effect; never blocks.
    Apply(Effect),
}

/// An independent ordered phase sequence within a program.
pub type Track = Vec<Phase>;

/// A whole step's animation script.
#[derive(Debug, Clone, PartialEq)]
pub struct StepProgram {
    /// Narrative role of the step, for logging.
    pub name: &'static str,
    /// Parallel tracks, each strictly ordered internally.
    pub tracks: Vec<Track>,
}

impl StepProgram {
    /// Program with no animation at all.
    #[must_use]
    pub fn empty(name: &'static str) -> Self {
        Self {
            name,
            tracks: Vec::new(),
        }
    }

    /// Single-track program.
    #[must_use]
    pub fn single(name: &'static str, track: Track) -> Self {
        Self {
            name,
            tracks: vec![track],
        }
    }

    /// Whether the program has any phases to run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.iter().all(Vec::is_empty)
    }

    /// Total phase count across all tracks.
    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.tracks.iter().map(Vec::len).sum()
    }
}
