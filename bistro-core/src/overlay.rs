//! Overlay state: a single active surface, exit transitions and scroll lock
//!
//! Mutual exclusion is structural: there is exactly one [`Overlay`] value, so
//! opening one surface replaces whatever was open before.

/// Which modal-like surface is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Full-screen bottom sheet listing categories.
    CategorySheet,
    /// Panel expanded from the floating action button.
    CategoryPanel,
    /// Cart summary expanded from the floating action button.
    CartPanel,
    /// Photo viewer for one menu item id.
    Lightbox(String),
    /// Full cart page view.
    CartPage,
}

impl Overlay {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Category panel and cart panel share the floating button.
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        matches!(self, Self::CategoryPanel | Self::CartPanel)
    }

    #[must_use]
    pub const fn is_category_picker(&self) -> bool {
        matches!(self, Self::CategorySheet | Self::CategoryPanel)
    }

    /// Full-screen surfaces suspend page scroll.
    #[must_use]
    pub const fn locks_scroll(&self) -> bool {
        matches!(
            self,
            Self::CategorySheet | Self::CartPanel | Self::Lightbox(_) | Self::CartPage
        )
    }

    #[must_use]
    pub fn lightbox_item(&self) -> Option<&str> {
        match self {
            Self::Lightbox(id) => Some(id),
            _ => None,
        }
    }
}

/// Work deferred until the exit transition has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterClose {
    ScrollToTop,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayState {
    active: Overlay,
    /// Previous surface kept mounted while its exit animation runs.
    leaving: Option<Overlay>,
    after_close: Option<AfterClose>,
}

impl OverlayState {
    #[must_use]
    pub const fn active(&self) -> &Overlay {
        &self.active
    }

    #[must_use]
    pub const fn leaving(&self) -> Option<&Overlay> {
        self.leaving.as_ref()
    }

    /// Whether `overlay` is in the tree, either open or animating out.
    #[must_use]
    pub fn is_mounted(&self, overlay: &Overlay) -> bool {
        &self.active == overlay || self.leaving.as_ref() == Some(overlay)
    }

    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.after_close.is_some()
    }

    /// Open `overlay`, closing whatever was open.
    pub fn open(&mut self, overlay: Overlay) {
        if overlay == self.active {
            return;
        }
        let previous = std::mem::replace(&mut self.active, overlay);
        if previous.is_open() {
            self.leaving = Some(previous);
        } else if self.leaving.as_ref() == Some(&self.active) {
            // Reopened mid-exit.
            self.leaving = None;
        }
    }

    /// Open `overlay`, or close it if it is already the open one.
    pub fn toggle(&mut self, overlay: Overlay) {
        if self.active == overlay {
            self.close();
        } else {
            self.open(overlay);
        }
    }

    /// Start closing the active overlay. Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        if !self.active.is_open() {
            return false;
        }
        self.leaving = Some(std::mem::take(&mut self.active));
        true
    }

    /// Escape key handler.
    pub fn escape(&mut self) -> bool {
        self.close()
    }

    /// A category was picked inside a picker: close it and scroll to top once it is gone.
    pub fn category_selected(&mut self) -> bool {
        if !self.active.is_category_picker() {
            return false;
        }
        self.close();
        self.after_close = Some(AfterClose::ScrollToTop);
        true
    }

    /// The exit transition finished; unmount and hand back deferred work.
    pub fn finish_close(&mut self) -> Option<AfterClose> {
        self.leaving = None;
        self.after_close.take()
    }
}

/// Captures the page offset when scroll is suspended and restores exactly that value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollLock {
    saved: Option<f64>,
}

/// Side effect the view must apply after [`ScrollLock::sync`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LockChange {
    Engage,
    Release { restore_to: f64 },
    Unchanged,
}

impl ScrollLock {
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    #[must_use]
    pub const fn saved_offset(&self) -> Option<f64> {
        self.saved
    }

    /// Bring the lock in line with `want_locked`. The offset is captured only
    /// on the unlocked-to-locked edge, so chained overlays keep the original value.
    pub fn sync(&mut self, want_locked: bool, current_offset: f64) -> LockChange {
        match (self.saved, want_locked) {
            (None, true) => {
                self.saved = Some(current_offset);
                LockChange::Engage
            }
            (Some(saved), false) => {
                self.saved = None;
                LockChange::Release { restore_to: saved }
            }
            _ => LockChange::Unchanged,
        }
    }
}

/// What a Tab press inside a focus-trapped surface should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMove {
    /// The browser moves focus to the next element within the surface.
    Browser,
    /// Wrap focus to the focusable element at this index.
    Focus(usize),
    /// Nothing inside can take focus; keep it where it is.
    Stay,
}

/// Decide where Tab goes among `len` focusable elements when `current` (index of the
/// focused one, `None` if focus sits on the container) is at an edge.
#[must_use]
pub fn trap_tab(len: usize, current: Option<usize>, backwards: bool) -> TabMove {
    let Some(last) = len.checked_sub(1) else {
        return TabMove::Stay;
    };
    match (current, backwards) {
        (None, false) => TabMove::Focus(0),
        (None, true) => TabMove::Focus(last),
        (Some(index), false) if index >= last => TabMove::Focus(0),
        (Some(0), true) => TabMove::Focus(last),
        _ => TabMove::Browser,
    }
}
