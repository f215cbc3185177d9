//! Host collaborators: screen metrics and the leaf drawing primitive

use serde::{Deserialize, Serialize};

/// Window dimensions in points
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Source of the current window size, queried on every frame
pub trait ScreenMetrics {
    fn window_size(&self) -> ScreenSize;
}

/// A fixed size is its own metrics source (headless hosts, tests)
impl ScreenMetrics for ScreenSize {
    fn window_size(&self) -> ScreenSize {
        *self
    }
}

/// One entry of a transform list. Rotations are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    TranslateX(f32),
    TranslateY(f32),
    RotateX(f32),
    RotateY(f32),
    Rotate(f32),
}

/// Everything the leaf primitive needs to draw one piece
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece<'a> {
    /// Position in the particle list
    pub index: usize,
    pub color: &'a str,
    /// Placement of the piece's container: `[translateX, translateY]`
    pub container_transform: [Transform; 2],
    /// Spin and sway of the piece itself:
    /// `[rotateX, rotateY, rotate, translateX]`
    pub transform: [Transform; 4],
    pub opacity: f32,
}

/// The leaf drawing primitive supplied by the host
pub trait ConfettiCanvas {
    fn draw_confetti(&mut self, piece: ConfettiPiece<'_>);
}
