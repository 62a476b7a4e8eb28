//! Scheduler: registry of the active step's pending delays and running
//! ramps, with bulk cancellation.
//!
//! Every phase of a program lives here from the moment the program starts,
//! so a step change cancels the entire chain, including continuations that
//! have not been reached yet. `cancel_all` takes effect synchronously:
//! there is no tick in flight that could still commit afterwards.

use web_time::Instant;

use crate::animation::phase::StepProgram;
use crate::animation::runner::{TrackRunner, TrackStatus};
use crate::scene::SceneState;

/// Owns the track runners of the currently active step program.
#[derive(Debug, Default)]
pub struct Scheduler {
    tracks: Vec<TrackRunner>,
}

impl Scheduler {
    /// Empty scheduler with nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a program and execute its synchronous portion: leading
    /// instantaneous effects apply immediately, the first blocking phase
    /// of each track is armed at `now`.
    ///
    /// Any previously registered program is cancelled first.
    pub fn start(
        &mut self,
        program: StepProgram,
        scene: &mut SceneState,
        now: Instant,
    ) {
        self.cancel_all();
        log::debug!(
            "starting '{}' program ({} phases)",
            program.name,
            program.phase_count()
        );
        for track in program.tracks {
            if track.is_empty() {
                continue;
            }
            let mut runner = TrackRunner::new(track);
            let _ = runner.tick(scene, now);
            if !runner.is_done() {
                self.tracks.push(runner);
            }
        }
    }

    /// Advance every registered track by one frame tick. Finished tracks
    /// are dropped. Returns true while any track still has phases left.
    pub fn tick(&mut self, scene: &mut SceneState, now: Instant) -> bool {
        self.tracks
            .retain_mut(|track| track.tick(scene, now) == TrackStatus::Running);
        !self.tracks.is_empty()
    }

    /// Cancel every pending delay and running ramp and clear the registry.
    /// Idempotent; safe on an empty registry.
    pub fn cancel_all(&mut self) {
        if !self.tracks.is_empty() {
            log::debug!("cancelling {} running track(s)", self.tracks.len());
        }
        self.tracks.clear();
    }

    /// True when no track has phases left.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of tracks still running.
    #[must_use]
    pub fn active_tracks(&self) -> usize {
        self.tracks.len()
    }
}
