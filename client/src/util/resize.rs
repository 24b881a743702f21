//! Drag-resize math for the chat window.
//!
//! The gesture is a two-state machine: `Idle` until a pointer press on the
//! resize handle, `Dragging` until release. While dragging, the size is the
//! baseline plus the pointer delta, floor-clamped per axis. No upper bound.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

/// Smallest allowed widget width in CSS pixels.
pub const MIN_WIDTH: f64 = 300.0;
/// Smallest allowed widget height in CSS pixels.
pub const MIN_HEIGHT: f64 = 200.0;

pub const DEFAULT_WIDTH: f64 = 400.0;
pub const DEFAULT_HEIGHT: f64 = 500.0;

/// Chat window bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetSize {
    pub width: f64,
    pub height: f64,
}

impl WidgetSize {
    /// Build a size with both axes clamped to the minimums.
    pub fn clamped(width: f64, height: f64) -> Self {
        Self { width: width.max(MIN_WIDTH), height: height.max(MIN_HEIGHT) }
    }

    /// Inline style binding for the window element.
    pub fn style(self) -> String {
        format!("width: {:.0}px; height: {:.0}px;", self.width, self.height)
    }
}

impl Default for WidgetSize {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

/// Resize gesture state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ResizeGesture {
    #[default]
    Idle,
    Dragging {
        start_x: f64,
        start_y: f64,
        baseline: WidgetSize,
    },
}

impl ResizeGesture {
    /// Start a drag at pointer `(x, y)` from the current size.
    pub fn begin(x: f64, y: f64, baseline: WidgetSize) -> Self {
        Self::Dragging { start_x: x, start_y: y, baseline }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Size for pointer position `(x, y)`, or `None` when idle.
    pub fn size_at(&self, x: f64, y: f64) -> Option<WidgetSize> {
        match *self {
            Self::Idle => None,
            Self::Dragging { start_x, start_y, baseline } => Some(WidgetSize::clamped(
                baseline.width + (x - start_x),
                baseline.height + (y - start_y),
            )),
        }
    }
}
