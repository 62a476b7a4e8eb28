//! Step controller: navigation, teardown-before-start, and the per-frame
//! drive entry point.
//!
//! The controller owns the scheduler and the scene. Every step change runs
//! the same protocol: cancel the running program, reset the scene, apply
//! the target step's compromised preset, then build and start the new
//! program. Only after the cancel may a new program touch the scene, so
//! two programs never write competing values.

use web_time::Instant;

use crate::animation::programs;
use crate::animation::scheduler::Scheduler;
use crate::animation::timing::Timing;
use crate::render::Frame;
use crate::scene::{SceneState, INFRASTRUCTURE};
use crate::script::{StoryStep, SCRIPT};

/// Steps whose compromised set is preset to the full infrastructure row.
const PRESET_COMPROMISED_STEPS: [usize; 3] = [3, 4, 5];

/// Drives the scenario: holds the current step, the scene, and the active
/// program.
#[derive(Debug)]
pub struct StepController {
    step: usize,
    scene: SceneState,
    scheduler: Scheduler,
    timing: Timing,
    script: &'static [StoryStep],
}

impl StepController {
    /// Controller over the built-in scenario with default timing,
    /// positioned at step 0.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self::with_timing(Timing::default(), now)
    }

    /// Controller over the built-in scenario with custom timing.
    #[must_use]
    pub fn with_timing(timing: Timing, now: Instant) -> Self {
        Self::with_script(&SCRIPT, timing, now)
    }

    /// Controller over a custom script. An empty script falls back to the
    /// built-in scenario.
    #[must_use]
    pub fn with_script(
        script: &'static [StoryStep],
        timing: Timing,
        now: Instant,
    ) -> Self {
        let script = if script.is_empty() { &SCRIPT } else { script };
        let mut controller = Self {
            step: 0,
            scene: SceneState::new(),
            scheduler: Scheduler::new(),
            timing,
            script,
        };
        controller.enter_step(0, now);
        controller
    }

    /// Jump to a step. The index is clamped to the valid range; jumping to
    /// the current step is a no-op.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        let target = index.min(self.last_step());
        if target == self.step {
            return;
        }
        log::info!("step {} -> {}", self.step, target);
        self.enter_step(target, now);
    }

    /// Advance one step. Returns false (and does nothing) at the last step.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.step == self.last_step() {
            return false;
        }
        self.go_to(self.step + 1, now);
        true
    }

    /// Go back one step. Returns false (and does nothing) at step 0.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.step == 0 {
            return false;
        }
        self.go_to(self.step - 1, now);
        true
    }

    /// Replay the scenario from step 0.
    pub fn restart(&mut self, now: Instant) {
        self.go_to(0, now);
    }

    /// Drive the active program by one frame tick. Returns true while any
    /// animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.scheduler.tick(&mut self.scene, now)
    }

    /// Current step index.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Total number of steps, for "Step N / M" display.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.script.len()
    }

    /// Scene read by the render surface.
    #[must_use]
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Narrative for the current step.
    #[must_use]
    pub fn story(&self) -> &StoryStep {
        self.story_at(self.step)
    }

    /// Whether the active program still has phases running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Snapshot view handed to a render surface.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            step: self.step,
            step_count: self.step_count(),
            scene: &self.scene,
            story: self.story(),
        }
    }

    fn last_step(&self) -> usize {
        self.script.len() - 1
    }

    fn story_at(&self, index: usize) -> &StoryStep {
        self.script.get(index).unwrap_or(&self.script[0])
    }

    /// Teardown-before-start: cancel, reset, preset, then start the new
    /// program including its synchronous leading effects.
    fn enter_step(&mut self, index: usize, now: Instant) {
        self.scheduler.cancel_all();
        self.scene.reset();
        if PRESET_COMPROMISED_STEPS.contains(&index) {
            self.scene.mark_compromised(&INFRASTRUCTURE);
        }
        self.step = index;
        let program = programs::for_step(index, self.story_at(index), &self.timing);
        self.scheduler.start(program, &mut self.scene, now);
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::scene::{BoolField, NodeId, ScalarField, SEGMENT_COUNT};

    const FRAME: Duration = Duration::from_millis(16);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Tick at frame cadence until the controller goes idle. Panics the
    /// test via assert if the cap is hit.
    fn run_to_idle(
        controller: &mut StepController,
        mut now: Instant,
        max_ticks: usize,
    ) -> Instant {
        for _ in 0..max_ticks {
            if !controller.tick(now) {
                return now;
            }
            now += FRAME;
        }
        assert!(!controller.is_animating(), "program never went idle");
        now
    }

    #[test]
    fn test_starts_at_baseline() {
        let controller = StepController::new(Instant::now());
        assert_eq!(controller.step(), 0);
        assert_eq!(controller.step_count(), 7);
        assert!(!controller.is_animating());
        assert_eq!(*controller.scene(), SceneState::default());
    }

    #[test]
    fn test_navigation_clamps_at_boundaries() {
        let start = Instant::now();
        let mut controller = StepController::new(start);

        assert!(!controller.previous(start));
        assert_eq!(controller.step(), 0);
        assert_eq!(*controller.scene(), SceneState::default());

        controller.go_to(6, start);
        assert!(!controller.next(start));
        assert_eq!(controller.step(), 6);

        // A wild index clamps to the last step.
        controller.go_to(100, start);
        assert_eq!(controller.step(), 6);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(4, start);
        let _ = controller.tick(start + FRAME);

        controller.restart(start + ms(100));
        let after_first = (controller.step(), controller.scene().clone());
        controller.restart(start + ms(200));
        assert_eq!(controller.step(), after_first.0);
        assert_eq!(*controller.scene(), after_first.1);
    }

    #[test]
    fn test_compromised_preset_per_step() {
        let start = Instant::now();
        let mut controller = StepController::new(start);

        for target in 0..controller.step_count() {
            controller.go_to(target, start);
            let expected = if matches!(target, 3..=5) {
                INFRASTRUCTURE.len()
            } else {
                0
            };
            // The preset is visible before any timer fires.
            assert_eq!(
                controller.scene().compromised().len(),
                expected,
                "step {target}"
            );
        }
    }

    #[test]
    fn test_preset_survives_stepping_through() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        // Reach step 3 via next() alone, never letting animations run.
        for _ in 0..3 {
            assert!(controller.next(start));
        }
        assert_eq!(controller.step(), 3);
        assert_eq!(
            controller.scene().compromised().len(),
            INFRASTRUCTURE.len()
        );
    }

    #[test]
    fn test_cancelled_program_never_fires() {
        let start = Instant::now();
        let mut controller = StepController::new(start);

        controller.go_to(1, start);
        // Let the reveal land and the line ramps get underway.
        let mut now = start;
        while now < start + ms(4200) {
            now += FRAME;
            let _ = controller.tick(now);
        }
        assert!(controller.scene().flag(BoolField::VulnRevealed));
        assert!(controller.scene().scalar(ScalarField::ExploitLine) > 0.0);

        // Change step mid-ramp; nothing from step 1 may land afterwards.
        controller.go_to(6, now);
        let snapshot = controller.scene().clone();
        for _ in 0..600 {
            now += FRAME;
            let _ = controller.tick(now);
        }
        assert_eq!(*controller.scene(), snapshot);
        assert!(!controller.scene().flag(BoolField::VulnRevealed));
        assert_eq!(controller.scene().scalar(ScalarField::ExploitLine), 0.0);
    }

    #[test]
    fn test_step_change_before_any_timer_resets_cleanly() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(5, start);
        controller.go_to(0, start);
        assert_eq!(*controller.scene(), SceneState::default());
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_exposure_lines_grow_strictly_in_sequence() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(1, start);

        let mut now = start;
        let mut last_exploit = 0.0f32;
        let mut last_breach = 0.0f32;
        for _ in 0..800 {
            now += FRAME;
            let animating = controller.tick(now);
            let exploit = controller.scene().scalar(ScalarField::ExploitLine);
            let breach = controller.scene().scalar(ScalarField::BreachLine);

            // Non-decreasing commits.
            assert!(exploit >= last_exploit);
            assert!(breach >= last_breach);
            // The breach line never moves before the exploit line is done.
            if breach > 0.0 {
                assert_eq!(exploit, 1.0);
            }
            last_exploit = exploit;
            last_breach = breach;
            if !animating {
                break;
            }
        }
        assert_eq!(last_exploit, 1.0);
        assert_eq!(last_breach, 1.0);
        assert_eq!(controller.scene().sentence(), 1);
    }

    #[test]
    fn test_intrusion_chain_runs_to_full_compromise() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(2, start);

        let mut now = start;
        for _ in 0..800 {
            now += FRAME;
            // Segments grow strictly one at a time.
            let scene = controller.scene();
            let mut active = 0;
            for i in 0..SEGMENT_COUNT {
                let p = scene.scalar(ScalarField::AttackSegment(i));
                if p > 0.0 && p < 1.0 {
                    active += 1;
                }
                // A later segment only moves once every earlier one is done.
                if p > 0.0 && i > 0 {
                    assert_eq!(
                        scene.scalar(ScalarField::AttackSegment(i - 1)),
                        1.0
                    );
                }
            }
            assert!(active <= 1);
            if !controller.tick(now) {
                break;
            }
        }
        assert!(!controller.is_animating());

        let scene = controller.scene();
        for i in 0..SEGMENT_COUNT {
            assert_eq!(scene.scalar(ScalarField::AttackSegment(i)), 1.0);
        }
        let compromised = scene.compromised();
        assert_eq!(compromised.len(), INFRASTRUCTURE.len());
        for node in INFRASTRUCTURE {
            assert!(compromised.contains(&node));
        }
        assert!(!compromised.contains(&NodeId::Attacker));
        assert_eq!(scene.sentence(), 1);
    }

    #[test]
    fn test_detection_alert_waits_for_second_sentence() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(3, start);

        // Before the sentence switch the alert line is untouched.
        let mut now = start + ms(2000);
        let _ = controller.tick(now);
        assert_eq!(controller.scene().sentence(), 0);
        assert_eq!(controller.scene().scalar(ScalarField::AlertLine), 0.0);

        now = start + ms(2200);
        let _ = controller.tick(now);
        assert_eq!(controller.scene().sentence(), 1);

        let end = run_to_idle(&mut controller, now, 200);
        assert_eq!(controller.scene().scalar(ScalarField::AlertLine), 1.0);
        assert!(end > now);
    }

    #[test]
    fn test_triage_line_grows_then_fades() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(4, start);

        let mut now = start + ms(300);
        let _ = controller.tick(now);
        assert!(controller.scene().flag(BoolField::AnalystVisible));
        assert!(controller.scene().flag(BoolField::SensorGlow));
        assert!(!controller.scene().flag(BoolField::TriageLineVisible));

        let mut saw_full_line_at_full_opacity = false;
        for _ in 0..800 {
            now += FRAME;
            let animating = controller.tick(now);
            let scene = controller.scene();
            if scene.scalar(ScalarField::TriageLine) == 1.0
                && scene.scalar(ScalarField::TriageLineOpacity) == 1.0
            {
                saw_full_line_at_full_opacity = true;
            }
            // The fade never starts before the growth completes.
            if scene.scalar(ScalarField::TriageLineOpacity) < 1.0 {
                assert_eq!(scene.scalar(ScalarField::TriageLine), 1.0);
            }
            if !animating {
                break;
            }
        }
        assert!(saw_full_line_at_full_opacity);
        let scene = controller.scene();
        assert!(scene.flag(BoolField::TriageLineVisible));
        assert_eq!(scene.scalar(ScalarField::TriageLine), 1.0);
        assert_eq!(scene.scalar(ScalarField::TriageLineOpacity), 0.0);
    }

    #[test]
    fn test_containment_chain_order_and_terminal_state() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(5, start);

        let mut now = start;
        let mut peak_scale = 0.0f32;
        for _ in 0..2000 {
            now += FRAME;
            let animating = controller.tick(now);
            let scene = controller.scene();
            let scale = scene.scalar(ScalarField::AttackerScale);
            peak_scale = peak_scale.max(scale);

            // Lockstep pairs stay identical every tick.
            assert_eq!(
                scene.scalar(ScalarField::RedLineOpacity),
                scene.scalar(ScalarField::RedHighlightOpacity)
            );
            assert_eq!(scale, scene.scalar(ScalarField::AnalystScale));

            // The red fade waits for the response line fade.
            if scene.scalar(ScalarField::RedLineOpacity) < 1.0 {
                assert_eq!(
                    scene.scalar(ScalarField::ResponseLineOpacity),
                    0.0
                );
            }
            // The pulse waits for the red fade.
            if scale != 1.0 {
                assert_eq!(scene.scalar(ScalarField::RedLineOpacity), 0.0);
            }
            if !animating {
                break;
            }
        }
        assert!(!controller.is_animating());
        assert_eq!(peak_scale, 1.5);

        let scene = controller.scene();
        assert_eq!(scene.scalar(ScalarField::ResponseLine), 1.0);
        assert_eq!(scene.scalar(ScalarField::ResponseLineOpacity), 0.0);
        assert_eq!(scene.scalar(ScalarField::AttackerScale), 0.0);
        assert_eq!(scene.scalar(ScalarField::AttackerOpacity), 0.0);
        assert_eq!(scene.scalar(ScalarField::AnalystOpacity), 0.0);
        assert_eq!(scene.scalar(ScalarField::GlowOpacity), 0.0);
        assert_eq!(scene.sentence(), 1);
    }

    #[test]
    fn test_aftermath_matches_containment_terminal_fields() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(5, start);
        let _ = run_to_idle(&mut controller, start, 2000);
        let terminal = controller.scene().clone();

        controller.go_to(6, start);
        assert!(!controller.is_animating());
        let aftermath = controller.scene();
        for field in [
            ScalarField::AttackerScale,
            ScalarField::AnalystScale,
            ScalarField::AttackerOpacity,
            ScalarField::AnalystOpacity,
            ScalarField::RedLineOpacity,
            ScalarField::RedHighlightOpacity,
            ScalarField::ResponseLine,
            ScalarField::ResponseLineOpacity,
            ScalarField::GlowOpacity,
        ] {
            assert_eq!(
                aftermath.scalar(field),
                terminal.scalar(field),
                "{field:?}"
            );
        }
        assert!(aftermath.flag(BoolField::ResponseLineVisible));
    }

    #[test]
    fn test_frame_snapshot_reflects_current_step() {
        let start = Instant::now();
        let mut controller = StepController::new(start);
        controller.go_to(2, start);
        let frame = controller.frame();
        assert_eq!(frame.step, 2);
        assert_eq!(frame.step_count, 7);
        assert!(frame.story.has_second_sentence());
    }
}
