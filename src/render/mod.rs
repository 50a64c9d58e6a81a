//! Path emission seam between shapes and a host drawing surface.
//!
//! The engine never rasterizes. Every solid knows how to describe its outline
//! as move/line/curve commands against a [`PathSink`]; binding those commands
//! to pixels (canvas, SVG, GPU tessellator) is the host's job.

use crate::math::Point;

/// Whether a rendered path is filled or stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAction {
    Fill,
    Stroke,
}

/// Receiver for path commands emitted by shapes.
///
/// `begin_path`, `fill` and `stroke` default to no-ops so pure path
/// collectors only need the command methods.
pub trait PathSink {
    /// Starts a fresh path.
    fn begin_path(&mut self) {}

    /// Moves the current point without drawing.
    fn move_to(&mut self, p: Point);

    /// Straight segment from the current point to `p`.
    fn line_to(&mut self, p: Point);

    /// Cubic Bezier segment from the current point via two handles.
    fn curve_to(&mut self, handle1: Point, handle2: Point, end: Point);

    /// Closes the current subpath.
    fn close_path(&mut self);

    /// Fills the current path (even-odd rule for shapes with holes).
    fn fill(&mut self) {}

    /// Strokes the current path.
    fn stroke(&mut self) {}
}

/// A recorded path command, for inspection and testing.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    ClosePath,
    Fill,
    Stroke,
}

/// A [`PathSink`] that records every command it receives.
#[derive(Debug, Default, Clone)]
pub struct PathRecorder {
    pub commands: Vec<PathCommand>,
}

impl PathRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathSink for PathRecorder {
    fn begin_path(&mut self) {
        self.commands.push(PathCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn curve_to(&mut self, handle1: Point, handle2: Point, end: Point) {
        self.commands.push(PathCommand::CurveTo(handle1, handle2, end));
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(PathCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(PathCommand::Stroke);
    }
}
