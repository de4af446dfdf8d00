//! Renderer-facing snapshot of the player.

use crate::FramePlayer;

/// Everything a renderer needs to draw the current step.
///
/// This is a platform-agnostic, borrowed view of a [`FramePlayer`]. Each
/// consumer maps it onto its own chart or widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameView<'a> {
    /// Values of the visible frame
    pub values: &'a [f64],
    /// Zero-based index of the visible frame
    pub step: usize,
    /// Number of frames in the loaded run
    pub total_frames: usize,
    /// Whether "next step" should be enabled
    pub can_step_forward: bool,
    /// Whether "previous step" should be enabled
    pub can_step_backward: bool,
}

impl<'a> FrameView<'a> {
    pub fn new(player: &'a FramePlayer) -> Self {
        Self {
            values: player.current_frame(),
            step: player.current_step(),
            total_frames: player.total_frames(),
            can_step_forward: player.can_step_forward(),
            can_step_backward: player.can_step_backward(),
        }
    }

    /// Largest value in the frame, for scaling a chart axis.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    /// Human-readable step counter, e.g. "Step 3 / 10".
    pub fn step_label(&self) -> String {
        if self.total_frames == 0 {
            "No steps".to_string()
        } else {
            format!("Step {} / {}", self.step + 1, self.total_frames)
        }
    }
}
