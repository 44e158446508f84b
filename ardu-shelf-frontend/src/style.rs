//! Responsive toggle for the alternate list stylesheet.

/// Viewport width (logical pixels) from which the list stylesheet is disabled.
pub const WIDE_VIEWPORT: u32 = 480;

/// Width assumed when the caller does not know the viewport.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

/// Tracks whether the alternate stylesheet is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleToggle {
    disabled: bool,
}

impl StyleToggle {
    pub fn new(disabled: bool) -> Self {
        Self { disabled }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Re-evaluate the stylesheet for a viewport width.
    ///
    /// Returns `true` when the state was written. Without `force`, nothing is
    /// written if the desired state already matches.
    pub fn switch(&mut self, viewport_width: u32, force: bool) -> bool {
        let disabled = viewport_width >= WIDE_VIEWPORT;
        if force || self.disabled != disabled {
            self.disabled = disabled;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "tests/style_tests.rs"]
mod tests;
