//! Local UI chrome state (chat window visibility and size).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the conversation state so the
//! window can open, close, and resize without touching the transcript.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::resize::{ResizeGesture, WidgetSize};

/// UI state for the floating chat window.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub chat_open: bool,
    pub chat_size: WidgetSize,
    pub resize: ResizeGesture,
}

impl UiState {
    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    /// Enter the dragging state using the current size as baseline.
    pub fn begin_resize(&mut self, x: f64, y: f64) {
        self.resize = ResizeGesture::begin(x, y, self.chat_size);
    }

    /// Apply a pointer move. Returns `true` when the size was updated.
    pub fn resize_to(&mut self, x: f64, y: f64) -> bool {
        match self.resize.size_at(x, y) {
            Some(size) => {
                self.chat_size = size;
                true
            }
            None => false,
        }
    }

    pub fn end_resize(&mut self) {
        self.resize = ResizeGesture::Idle;
    }
}
