//! Scroll-driven chrome visibility
//!
//! The header and floating buttons hide while the reader scrolls down and come
//! back on a deliberate upward scroll or near the top of the page. A dead band
//! between the two thresholds keeps small jitter from toggling the chrome.

/// Thresholds in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    /// At or below this offset the chrome is always visible.
    pub top: f64,
    /// Downward delta that hides the chrome.
    pub hide: f64,
    /// Upward delta that shows the chrome.
    pub show: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            top: 24.0,
            hide: 14.0,
            show: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollVisibility {
    thresholds: ScrollThresholds,
    last_offset: f64,
    hidden: bool,
    enabled: bool,
}

impl Default for ScrollVisibility {
    fn default() -> Self {
        Self::new(ScrollThresholds::default())
    }
}

impl ScrollVisibility {
    #[must_use]
    pub const fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            last_offset: 0.0,
            hidden: false,
            enabled: true,
        }
    }

    #[must_use]
    pub const fn hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Feed one (frame-coalesced) scroll sample. Returns the new `hidden` value.
    pub fn sample(&mut self, offset: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let delta = offset - self.last_offset;
        self.last_offset = offset;

        if offset <= self.thresholds.top {
            self.hidden = false;
        } else if delta > self.thresholds.hide {
            self.hidden = true;
        } else if -delta > self.thresholds.show {
            self.hidden = false;
        }
        self.hidden
    }

    /// Stop tracking; chrome becomes visible immediately.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.hidden = false;
    }

    /// Resume tracking from `offset` without treating the jump as a scroll.
    pub fn enable(&mut self, offset: f64) {
        self.enabled = true;
        self.last_offset = offset;
    }
}

/// "Ticking" guard: at most one pending animation-frame callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Returns `true` if the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    /// Called from inside the frame callback.
    pub fn complete(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub const fn is_ticking(self) -> bool {
        self.ticking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_on_large_downward_step_and_shows_near_top() {
        let mut tracker = ScrollVisibility::default();
        assert!(tracker.sample(50.0));
        assert!(!tracker.sample(10.0));
    }

    #[test]
    fn small_jitter_does_not_toggle() {
        let mut tracker = ScrollVisibility::default();
        tracker.sample(100.0);
        assert!(tracker.hidden());
        assert!(tracker.sample(95.0));
        assert!(tracker.sample(105.0));
        assert!(!tracker.sample(90.0));
        assert!(!tracker.sample(100.0));
    }

    #[test]
    fn upward_scroll_beyond_show_threshold_reveals() {
        let mut tracker = ScrollVisibility::default();
        tracker.sample(400.0);
        assert!(!tracker.sample(389.0));
    }

    #[test]
    fn disabling_forces_visible_and_ignores_samples() {
        let mut tracker = ScrollVisibility::default();
        tracker.sample(300.0);
        tracker.disable();
        assert!(!tracker.hidden());
        assert!(!tracker.sample(900.0));
        tracker.enable(900.0);
        assert!(!tracker.sample(905.0));
        assert!(tracker.sample(950.0));
    }

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(gate.is_ticking());
        gate.complete();
        assert!(gate.request());
    }
}
