//! Authoritative scene: the aggregate of every animatable field the render
//! surface reads each frame.
//!
//! All mutation funnels through typed setters so bounds clamping happens in
//! one place. Programs own fields exclusively while running; a full
//! [`SceneState::reset`] precedes every step change so no stale animation
//! state leaks across steps.

mod node;

pub use node::{
    descriptor, position, sensor_anchor, Connection, NodeDescriptor, NodeId,
    ATTACK_PATH, BASELINE_LINKS, DIAGRAM_NODES, INFRASTRUCTURE,
    SEGMENT_COUNT, SENSOR_OFFSET,
};

use rustc_hash::FxHashSet;

/// Upper clamp for scale fields (the pulse peak).
pub const SCALE_MAX: f32 = 1.5;

/// Identifier for one animatable scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    /// Attacker to zero-day line progress (exposure step).
    ExploitLine,
    /// Attacker to web application line progress (exposure step).
    BreachLine,
    /// One segment of the intrusion attack line, indexed along
    /// [`ATTACK_PATH`].
    AttackSegment(usize),
    /// Sensor to analyst alert line progress (detection step).
    AlertLine,
    /// Web application to analyst line progress (triage step).
    TriageLine,
    /// Opacity of the triage line, faded after its pause.
    TriageLineOpacity,
    /// Sensor to analyst response line progress (containment step).
    ResponseLine,
    /// Opacity of the response line.
    ResponseLineOpacity,
    /// Opacity of the red attack line overlay.
    RedLineOpacity,
    /// Opacity of the red compromised-node highlights.
    RedHighlightOpacity,
    /// Opacity of the sensor glow.
    GlowOpacity,
    /// Attacker node scale (containment pulse).
    AttackerScale,
    /// Analyst node scale (containment pulse).
    AnalystScale,
    /// Attacker node group opacity.
    AttackerOpacity,
    /// Analyst node group opacity.
    AnalystOpacity,
}

/// Bounds class of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Line growth fraction in [0, 1].
    Progress,
    /// Fade fraction in [0, 1].
    Opacity,
    /// Pulse scale in [0, `SCALE_MAX`].
    Scale,
}

impl ScalarField {
    /// Bounds class of this field.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::ExploitLine
            | Self::BreachLine
            | Self::AttackSegment(_)
            | Self::AlertLine
            | Self::TriageLine
            | Self::ResponseLine => FieldKind::Progress,
            Self::TriageLineOpacity
            | Self::ResponseLineOpacity
            | Self::RedLineOpacity
            | Self::RedHighlightOpacity
            | Self::GlowOpacity
            | Self::AttackerOpacity
            | Self::AnalystOpacity => FieldKind::Opacity,
            Self::AttackerScale | Self::AnalystScale => FieldKind::Scale,
        }
    }

    fn clamp(self, value: f32) -> f32 {
        match self.kind() {
            FieldKind::Progress | FieldKind::Opacity => value.clamp(0.0, 1.0),
            FieldKind::Scale => value.clamp(0.0, SCALE_MAX),
        }
    }
}

/// Identifier for one boolean visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolField {
    /// Zero-day node revealed (exposure step).
    VulnRevealed,
    /// Analyst node popped in (triage step).
    AnalystVisible,
    /// Sensor glow shown on the web application (triage step).
    SensorGlow,
    /// Triage line revealed.
    TriageLineVisible,
    /// Response line revealed.
    ResponseLineVisible,
}

/// Mutable record of every animatable property.
///
/// Reset defaults: progress fields, the sentence index, flags, and the
/// compromised set are zero/false/empty; opacity and scale fields sit at
/// full strength (1.0) until a program fades or pulses them.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SceneState {
    sentence: usize,
    vuln_revealed: bool,
    analyst_visible: bool,
    sensor_glow: bool,
    triage_line_visible: bool,
    response_line_visible: bool,
    exploit_line: f32,
    breach_line: f32,
    attack_segments: [f32; SEGMENT_COUNT],
    alert_line: f32,
    triage_line: f32,
    triage_line_opacity: f32,
    response_line: f32,
    response_line_opacity: f32,
    red_line_opacity: f32,
    red_highlight_opacity: f32,
    glow_opacity: f32,
    attacker_scale: f32,
    analyst_scale: f32,
    attacker_opacity: f32,
    analyst_opacity: f32,
    compromised: FxHashSet<NodeId>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            sentence: 0,
            vuln_revealed: false,
            analyst_visible: false,
            sensor_glow: false,
            triage_line_visible: false,
            response_line_visible: false,
            exploit_line: 0.0,
            breach_line: 0.0,
            attack_segments: [0.0; SEGMENT_COUNT],
            alert_line: 0.0,
            triage_line: 0.0,
            triage_line_opacity: 1.0,
            response_line: 0.0,
            response_line_opacity: 1.0,
            red_line_opacity: 1.0,
            red_highlight_opacity: 1.0,
            glow_opacity: 1.0,
            attacker_scale: 1.0,
            analyst_scale: 1.0,
            attacker_opacity: 1.0,
            analyst_opacity: 1.0,
            compromised: FxHashSet::default(),
        }
    }
}

impl SceneState {
    /// Fresh scene with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its reset default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current value of a scalar field.
    #[must_use]
    pub fn scalar(&self, field: ScalarField) -> f32 {
        match field {
            ScalarField::ExploitLine => self.exploit_line,
            ScalarField::BreachLine => self.breach_line,
            ScalarField::AttackSegment(i) => {
                self.attack_segments.get(i).copied().unwrap_or(0.0)
            }
            ScalarField::AlertLine => self.alert_line,
            ScalarField::TriageLine => self.triage_line,
            ScalarField::TriageLineOpacity => self.triage_line_opacity,
            ScalarField::ResponseLine => self.response_line,
            ScalarField::ResponseLineOpacity => self.response_line_opacity,
            ScalarField::RedLineOpacity => self.red_line_opacity,
            ScalarField::RedHighlightOpacity => self.red_highlight_opacity,
            ScalarField::GlowOpacity => self.glow_opacity,
            ScalarField::AttackerScale => self.attacker_scale,
            ScalarField::AnalystScale => self.analyst_scale,
            ScalarField::AttackerOpacity => self.attacker_opacity,
            ScalarField::AnalystOpacity => self.analyst_opacity,
        }
    }

    /// Commit a scalar value, clamped to the field's bounds. Out-of-range
    /// segment indices are ignored.
    pub fn set_scalar(&mut self, field: ScalarField, value: f32) {
        let value = field.clamp(value);
        match field {
            ScalarField::ExploitLine => self.exploit_line = value,
            ScalarField::BreachLine => self.breach_line = value,
            ScalarField::AttackSegment(i) => {
                if let Some(slot) = self.attack_segments.get_mut(i) {
                    *slot = value;
                }
            }
            ScalarField::AlertLine => self.alert_line = value,
            ScalarField::TriageLine => self.triage_line = value,
            ScalarField::TriageLineOpacity => {
                self.triage_line_opacity = value;
            }
            ScalarField::ResponseLine => self.response_line = value,
            ScalarField::ResponseLineOpacity => {
                self.response_line_opacity = value;
            }
            ScalarField::RedLineOpacity => self.red_line_opacity = value,
            ScalarField::RedHighlightOpacity => {
                self.red_highlight_opacity = value;
            }
            ScalarField::GlowOpacity => self.glow_opacity = value,
            ScalarField::AttackerScale => self.attacker_scale = value,
            ScalarField::AnalystScale => self.analyst_scale = value,
            ScalarField::AttackerOpacity => self.attacker_opacity = value,
            ScalarField::AnalystOpacity => self.analyst_opacity = value,
        }
    }

    /// Current value of a visibility flag.
    #[must_use]
    pub fn flag(&self, field: BoolField) -> bool {
        match field {
            BoolField::VulnRevealed => self.vuln_revealed,
            BoolField::AnalystVisible => self.analyst_visible,
            BoolField::SensorGlow => self.sensor_glow,
            BoolField::TriageLineVisible => self.triage_line_visible,
            BoolField::ResponseLineVisible => self.response_line_visible,
        }
    }

    /// Set a visibility flag.
    pub fn set_flag(&mut self, field: BoolField, value: bool) {
        match field {
            BoolField::VulnRevealed => self.vuln_revealed = value,
            BoolField::AnalystVisible => self.analyst_visible = value,
            BoolField::SensorGlow => self.sensor_glow = value,
            BoolField::TriageLineVisible => {
                self.triage_line_visible = value;
            }
            BoolField::ResponseLineVisible => {
                self.response_line_visible = value;
            }
        }
    }

    /// Index of the narrative sentence currently shown.
    #[must_use]
    pub fn sentence(&self) -> usize {
        self.sentence
    }

    /// Switch the visible narrative sentence.
    pub fn show_sentence(&mut self, index: usize) {
        self.sentence = index;
    }

    /// Nodes currently rendered with the attack highlight.
    #[must_use]
    pub fn compromised(&self) -> &FxHashSet<NodeId> {
        &self.compromised
    }

    /// Whether a node carries the attack highlight.
    #[must_use]
    pub fn is_compromised(&self, id: NodeId) -> bool {
        self.compromised.contains(&id)
    }

    /// Add nodes to the compromised set.
    pub fn mark_compromised(&mut self, nodes: &[NodeId]) {
        self.compromised.extend(nodes.iter().copied());
    }
}
