//! Render surface contract and helpers.
//!
//! The sequencer does not draw. A host supplies a [`RenderSurface`] and
//! paints a [`Frame`] once per animation tick and at least once after any
//! state mutation. [`LogSurface`] is the headless implementation used by
//! the demo binary.

use glam::Vec2;

use crate::animation::interpolation::{clamp01, point_at};
use crate::scene::{
    position, sensor_anchor, NodeDescriptor, NodeId, ScalarField, SceneState,
    ATTACK_PATH, DIAGRAM_NODES, SEGMENT_COUNT,
};
use crate::script::StoryStep;

/// Read-only view of everything a surface needs to paint one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Current step index.
    pub step: usize,
    /// Total step count, for "Step N / M" display.
    pub step_count: usize,
    /// Animatable state.
    pub scene: &'a SceneState,
    /// Narrative for the current step.
    pub story: &'a StoryStep,
}

impl Frame<'_> {
    /// Static node descriptors for the diagram.
    #[must_use]
    pub fn nodes(&self) -> &'static [NodeDescriptor] {
        &DIAGRAM_NODES
    }

    /// Narrative sentence currently visible.
    #[must_use]
    pub fn sentence(&self) -> &'static str {
        self.story.sentence(self.scene.sentence())
    }
}

/// Drawing capability the sequencer drives.
pub trait RenderSurface {
    /// Paint one frame.
    fn paint(&mut self, frame: &Frame<'_>);
}

/// Endpoints of a partially grown line: the start point and the tip at
/// `progress` along the way to `to`.
#[must_use]
pub fn grown_line(from: Vec2, to: Vec2, progress: f32) -> (Vec2, Vec2) {
    (from, point_at(from, to, clamp01(progress)))
}

/// Headless surface that reports the scene through the `log` facade.
///
/// Useful for demos and debugging; paints a compact summary line and the
/// tip of whichever attack segment is currently growing.
#[derive(Debug, Default)]
pub struct LogSurface;

impl RenderSurface for LogSurface {
    fn paint(&mut self, frame: &Frame<'_>) {
        let scene = frame.scene;
        log::debug!(
            "step {}/{} sentence {} compromised {}",
            frame.step + 1,
            frame.step_count,
            scene.sentence(),
            scene.compromised().len(),
        );
        for i in 0..SEGMENT_COUNT {
            let progress = scene.scalar(ScalarField::AttackSegment(i));
            if progress > 0.0 && progress < 1.0 {
                let (_, tip) = grown_line(
                    position(ATTACK_PATH[i]),
                    position(ATTACK_PATH[i + 1]),
                    progress,
                );
                log::debug!(
                    "attack segment {i} at ({:.0}, {:.0})",
                    tip.x,
                    tip.y
                );
            }
        }
        let alert = scene.scalar(ScalarField::AlertLine);
        if alert > 0.0 && alert < 1.0 {
            let (_, tip) =
                grown_line(sensor_anchor(), position(NodeId::Analyst), alert);
            log::debug!("alert line at ({:.0}, {:.0})", tip.x, tip.y);
        }
    }
}
