//! The seven scenario step programs.
//!
//! Each builder turns the step's behavior table into phase data. Branching
//! on the story (a step with a single sentence has no sentence switch, and
//! anything gated on the switch never runs) happens here, at build time,
//! so the runner stays generic.

use web_time::Duration;

use crate::animation::phase::{Effect, Phase, StepProgram, Track};
use crate::animation::ramp::{FixedRamp, TimedRamp};
use crate::animation::timing::Timing;
use crate::scene::{BoolField, ScalarField, INFRASTRUCTURE, SEGMENT_COUNT};
use crate::script::StoryStep;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Build the animation program for a scenario step.
#[must_use]
pub fn for_step(
    step: usize,
    story: &StoryStep,
    timing: &Timing,
) -> StepProgram {
    match step {
        1 => exposure(story, timing),
        2 => intrusion(story, timing),
        3 => detection(story, timing),
        4 => triage(timing),
        5 => containment(story, timing),
        6 => aftermath(),
        _ => StepProgram::empty("baseline"),
    }
}

/// Step 1: the zero-day node pops in; once the second sentence shows, the
/// exploit line and then the breach line grow, strictly in sequence.
fn exposure(story: &StoryStep, t: &Timing) -> StepProgram {
    let reveal = vec![
        Phase::Delay(ms(t.vuln_reveal_ms)),
        Phase::Apply(Effect::SetFlag(BoolField::VulnRevealed, true)),
    ];
    let mut tracks = vec![reveal];
    if story.has_second_sentence() {
        tracks.push(vec![
            Phase::Delay(ms(t.exposure_sentence_ms)),
            Phase::Apply(Effect::ShowSentence(1)),
            Phase::Delay(ms(t.exposure_line_lead_ms)),
            Phase::Ramp(FixedRamp::grow(ScalarField::ExploitLine, t.line_step)),
            Phase::Delay(ms(t.exposure_line_gap_ms)),
            Phase::Ramp(FixedRamp::grow(ScalarField::BreachLine, t.line_step)),
        ]);
    }
    StepProgram {
        name: "exposure",
        tracks,
    }
}

/// Step 2: the attack line crosses the infrastructure row one segment at a
/// time, pausing at each node; after the last pause every infrastructure
/// node is marked compromised. The sentence switch runs independently.
fn intrusion(story: &StoryStep, t: &Timing) -> StepProgram {
    let mut chain: Track = vec![Phase::Delay(ms(t.intrusion_start_ms))];
    for segment in 0..SEGMENT_COUNT {
        chain.push(Phase::Ramp(FixedRamp::grow(
            ScalarField::AttackSegment(segment),
            t.line_step,
        )));
        chain.push(Phase::Delay(ms(t.segment_pause_ms)));
    }
    chain.push(Phase::Apply(Effect::MarkCompromised(&INFRASTRUCTURE)));

    let mut tracks = vec![chain];
    if story.has_second_sentence() {
        tracks.push(vec![
            Phase::Delay(ms(t.sentence_switch_ms)),
            Phase::Apply(Effect::ShowSentence(1)),
        ]);
    }
    StepProgram {
        name: "intrusion",
        tracks,
    }
}

/// Step 3: sentence 1 shows immediately; once sentence 2 is up, the alert
/// line grows. With a single-sentence story nothing animates.
fn detection(story: &StoryStep, t: &Timing) -> StepProgram {
    if !story.has_second_sentence() {
        return StepProgram::empty("detection");
    }
    StepProgram::single(
        "detection",
        vec![
            Phase::Delay(ms(t.sentence_switch_ms)),
            Phase::Apply(Effect::ShowSentence(1)),
            Phase::Ramp(FixedRamp::grow(ScalarField::AlertLine, t.line_step)),
        ],
    )
}

/// Step 4: analyst and sensor glow pop in, the triage line grows, holds,
/// then fades out.
fn triage(t: &Timing) -> StepProgram {
    StepProgram::single(
        "triage",
        vec![
            Phase::Delay(ms(t.popin_delay_ms)),
            Phase::Apply(Effect::SetFlag(BoolField::AnalystVisible, true)),
            Phase::Apply(Effect::SetFlag(BoolField::SensorGlow, true)),
            Phase::Delay(ms(t.triage_line_delay_ms)),
            Phase::Apply(Effect::SetFlag(BoolField::TriageLineVisible, true)),
            Phase::Ramp(FixedRamp::grow(ScalarField::TriageLine, t.line_step)),
            Phase::Delay(ms(t.triage_fade_pause_ms)),
            Phase::Ramp(FixedRamp::fade(
                ScalarField::TriageLineOpacity,
                t.fade_step,
            )),
        ],
    )
}

/// Step 5: the long containment chain. Response line grows slowly and
/// fades; the red overlays fade in lockstep; the attacker and analyst
/// pulse up then shrink to nothing and vanish; the sensor glow fades last.
/// Every phase is gated on its predecessor plus the stated pause.
fn containment(story: &StoryStep, t: &Timing) -> StepProgram {
    let pulse_fields =
        vec![ScalarField::AttackerScale, ScalarField::AnalystScale];
    let chain = vec![
        Phase::Delay(ms(t.response_start_ms)),
        Phase::Apply(Effect::SetFlag(BoolField::ResponseLineVisible, true)),
        Phase::Ramp(FixedRamp::grow(
            ScalarField::ResponseLine,
            t.slow_line_step,
        )),
        Phase::Delay(ms(t.response_fade_pause_ms)),
        Phase::Ramp(FixedRamp::fade(
            ScalarField::ResponseLineOpacity,
            t.fade_step,
        )),
        Phase::Delay(ms(t.red_fade_gap_ms)),
        Phase::Ramp(FixedRamp::fade_all(
            vec![
                ScalarField::RedLineOpacity,
                ScalarField::RedHighlightOpacity,
            ],
            t.fade_step,
        )),
        Phase::Delay(ms(t.pulse_gap_ms)),
        Phase::Timed(TimedRamp::new(
            pulse_fields.clone(),
            1.0,
            t.scale_peak,
            ms(t.pulse_grow_ms),
        )),
        Phase::Timed(TimedRamp::new(
            pulse_fields,
            t.scale_peak,
            0.0,
            ms(t.pulse_shrink_ms),
        )),
        Phase::Apply(Effect::SetScalar(ScalarField::AttackerOpacity, 0.0)),
        Phase::Apply(Effect::SetScalar(ScalarField::AnalystOpacity, 0.0)),
        Phase::Ramp(FixedRamp::fade(ScalarField::GlowOpacity, t.fade_step)),
    ];

    let mut tracks = vec![chain];
    if story.has_second_sentence() {
        tracks.push(vec![
            Phase::Delay(ms(t.sentence_switch_ms)),
            Phase::Apply(Effect::ShowSentence(1)),
        ]);
    }
    StepProgram {
        name: "containment",
        tracks,
    }
}

/// Step 6: no ramps; re-establish the containment chain's terminal field
/// values so jumping here directly renders the completed fade-out.
fn aftermath() -> StepProgram {
    let terminal = [
        (ScalarField::AttackerScale, 0.0),
        (ScalarField::AnalystScale, 0.0),
        (ScalarField::AttackerOpacity, 0.0),
        (ScalarField::AnalystOpacity, 0.0),
        (ScalarField::RedLineOpacity, 0.0),
        (ScalarField::RedHighlightOpacity, 0.0),
        (ScalarField::ResponseLine, 1.0),
        (ScalarField::ResponseLineOpacity, 0.0),
        (ScalarField::GlowOpacity, 0.0),
    ];
    let mut track: Track = vec![Phase::Apply(Effect::SetFlag(
        BoolField::ResponseLineVisible,
        true,
    ))];
    track.extend(
        terminal
            .into_iter()
            .map(|(field, value)| Phase::Apply(Effect::SetScalar(field, value))),
    );
    StepProgram::single("aftermath", track)
}
