//! Track runner: interprets one phase sequence against the scene.
//!
//! The runner is the cancellation unit. It only makes progress inside
//! `tick`, so dropping it guarantees that no pending delay fires, no ramp
//! commits again, and no later phase of its track ever starts.

use web_time::Instant;

use crate::animation::phase::{Phase, Track};
use crate::scene::SceneState;

/// Armed state of the runner's current blocking phase.
#[derive(Debug, Clone, Copy)]
enum Wait {
    /// Delay fires once `now` passes the deadline.
    Until(Instant),
    /// Fixed ramp armed; first increment on the next tick.
    Armed,
    /// Timed ramp sampling from its arming instant.
    Sampling(Instant),
}

/// Result of advancing a track by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackStatus {
    /// Phases remain.
    Running,
    /// Every phase has completed.
    Done,
}

/// Cursor over one track's phases.
///
/// Instantaneous effects apply the moment they are reached; a blocking
/// phase is armed when reached and makes its first progress on the
/// following tick, matching frame-loop cadence.
#[derive(Debug)]
pub(crate) struct TrackRunner {
    phases: Track,
    cursor: usize,
    wait: Option<Wait>,
}

impl TrackRunner {
    pub(crate) fn new(phases: Track) -> Self {
        Self {
            phases,
            cursor: 0,
            wait: None,
        }
    }

    /// Advance as far as this tick allows: apply reached effects, fire due
    /// delays, step the armed ramp, arm the next blocking phase.
    pub(crate) fn tick(
        &mut self,
        scene: &mut SceneState,
        now: Instant,
    ) -> TrackStatus {
        loop {
            let Some(phase) = self.phases.get(self.cursor) else {
                return TrackStatus::Done;
            };
            match (phase, self.wait) {
                (Phase::Apply(effect), _) => {
                    effect.apply(scene);
                    self.cursor += 1;
                    self.wait = None;
                }
                (Phase::Delay(delay), None) => {
                    self.wait = Some(Wait::Until(now + *delay));
                    return TrackStatus::Running;
                }
                (Phase::Delay(_), Some(Wait::Until(deadline))) => {
                    if now < deadline {
                        return TrackStatus::Running;
                    }
                    self.cursor += 1;
                    self.wait = None;
                }
                (Phase::Ramp(_), None) => {
                    self.wait = Some(Wait::Armed);
                    return TrackStatus::Running;
                }
                (Phase::Ramp(ramp), Some(Wait::Armed)) => {
                    let Some(&driver) = ramp.fields.first() else {
                        self.cursor += 1;
                        self.wait = None;
                        continue;
                    };
                    let (next, done) = ramp.advance(scene.scalar(driver));
                    for field in &ramp.fields {
                        scene.set_scalar(*field, next);
                    }
                    if !done {
                        return TrackStatus::Running;
                    }
                    self.cursor += 1;
                    self.wait = None;
                }
                (Phase::Timed(_), None) => {
                    self.wait = Some(Wait::Sampling(now));
                    return TrackStatus::Running;
                }
                (Phase::Timed(ramp), Some(Wait::Sampling(started))) => {
                    let (value, done) = ramp.sample(started, now);
                    for field in &ramp.fields {
                        scene.set_scalar(*field, value);
                    }
                    if !done {
                        return TrackStatus::Running;
                    }
                    self.cursor += 1;
                    self.wait = None;
                }
                // A wait recorded for a previous phase kind; re-arm.
                (_, Some(_)) => {
                    self.wait = None;
                }
            }
        }
    }

    /// Whether every phase of this track has completed.
    pub(crate) fn is_done(&self) -> bool {
        self.cursor >= self.phases.len()
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::animation::phase::Effect;
    use crate::animation::ramp::FixedRamp;
    use crate::scene::{BoolField, ScalarField};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_leading_effects_apply_on_first_tick() {
        let track = vec![
            Phase::Apply(Effect::SetFlag(BoolField::VulnRevealed, true)),
            Phase::Apply(Effect::ShowSentence(1)),
        ];
        let mut runner = TrackRunner::new(track);
        let mut scene = SceneState::new();
        let status = runner.tick(&mut scene, Instant::now());

        assert_eq!(status, TrackStatus::Done);
        assert!(runner.is_done());
        assert!(scene.flag(BoolField::VulnRevealed));
        assert_eq!(scene.sentence(), 1);
    }

    #[test]
    fn test_delay_blocks_until_deadline() {
        let track = vec![
            Phase::Delay(ms(200)),
            Phase::Apply(Effect::SetFlag(BoolField::VulnRevealed, true)),
        ];
        let mut runner = TrackRunner::new(track);
        let mut scene = SceneState::new();
        let start = Instant::now();

        assert_eq!(runner.tick(&mut scene, start), TrackStatus::Running);
        assert_eq!(
            runner.tick(&mut scene, start + ms(199)),
            TrackStatus::Running
        );
        assert!(!scene.flag(BoolField::VulnRevealed));

        assert_eq!(
            runner.tick(&mut scene, start + ms(200)),
            TrackStatus::Done
        );
        assert!(scene.flag(BoolField::VulnRevealed));
    }

    #[test]
    fn test_ramp_first_increment_on_tick_after_arming() {
        let track = vec![Phase::Ramp(FixedRamp::grow(
            ScalarField::AlertLine,
            0.5,
        ))];
        let mut runner = TrackRunner::new(track);
        let mut scene = SceneState::new();
        let start = Instant::now();

        // Arming tick commits nothing.
        assert_eq!(runner.tick(&mut scene, start), TrackStatus::Running);
        assert_eq!(scene.scalar(ScalarField::AlertLine), 0.0);

        assert_eq!(
            runner.tick(&mut scene, start + ms(16)),
            TrackStatus::Running
        );
        assert_eq!(scene.scalar(ScalarField::AlertLine), 0.5);

        assert_eq!(
            runner.tick(&mut scene, start + ms(32)),
            TrackStatus::Done
        );
        assert_eq!(scene.scalar(ScalarField::AlertLine), 1.0);
    }

    #[test]
    fn test_delay_rearms_relative_to_fire_time() {
        let track = vec![
            Phase::Delay(ms(100)),
            Phase::Delay(ms(100)),
            Phase::Apply(Effect::ShowSentence(1)),
        ];
        let mut runner = TrackRunner::new(track);
        let mut scene = SceneState::new();
        let start = Instant::now();

        let _ = runner.tick(&mut scene, start);
        // First delay fires late; the second is armed from the fire tick.
        let _ = runner.tick(&mut scene, start + ms(150));
        assert_eq!(scene.sentence(), 0);
        let _ = runner.tick(&mut scene, start + ms(249));
        assert_eq!(scene.sentence(), 0);
        let status = runner.tick(&mut scene, start + ms(250));
        assert_eq!(status, TrackStatus::Done);
        assert_eq!(scene.sentence(), 1);
    }

    #[test]
    fn test_dropping_runner_cancels_pending_phases() {
        let track = vec![
            Phase::Delay(ms(100)),
            Phase::Apply(Effect::SetFlag(BoolField::SensorGlow, true)),
        ];
        let mut runner = TrackRunner::new(track);
        let mut scene = SceneState::new();
        let start = Instant::now();
        let _ = runner.tick(&mut scene, start);
        drop(runner);

        // No further mutation is possible once the runner is gone.
        assert!(!scene.flag(BoolField::SensorGlow));
        assert_eq!(scene, SceneState::default());
    }
}
