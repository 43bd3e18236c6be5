//! Carousel controller: active index, autoplay dwell, swipe and key input,
//! and the per-slide video state.
use crate::slide::Slide;

/// Dwell on an image slide before advancing.
pub const IMAGE_DWELL_MS: u32 = 5_000;
/// Video slides hold longer so a clip can actually play.
pub const VIDEO_DWELL_MS: u32 = 12_000;
/// Minimum horizontal travel for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 42.0;
/// Lifetime of the "sound on/off" indicator.
pub const SOUND_TOAST_MS: u32 = 1_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Image,
    Video,
}

impl From<&Slide> for SlideKind {
    fn from(slide: &Slide) -> Self {
        if slide.is_video() {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// Index arithmetic and autoplay policy over a fixed slide list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Carousel {
    kinds: Vec<SlideKind>,
    active: usize,
    paused: bool,
    reduced_motion: bool,
}

impl Carousel {
    #[must_use]
    pub fn new(slides: &[Slide]) -> Self {
        Self::from_kinds(slides.iter().map(SlideKind::from).collect())
    }

    #[must_use]
    pub const fn from_kinds(kinds: Vec<SlideKind>) -> Self {
        Self {
            kinds,
            active: 0,
            paused: false,
            reduced_motion: false,
        }
    }

    #[must_use]
    pub const fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Jump to `n`, wrapping in both directions. Inert on an empty list.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn go_to(&mut self, n: i64) -> usize {
        if self.kinds.is_empty() {
            return self.active;
        }
        let len = self.kinds.len() as i64;
        self.active = n.rem_euclid(len) as usize;
        self.active
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn next(&mut self) -> usize {
        self.go_to(self.active as i64 + 1)
    }

    #[allow(clippy::cast_possible_wrap)]
    pub fn prev(&mut self) -> usize {
        self.go_to(self.active as i64 - 1)
    }

    #[must_use]
    pub const fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    #[must_use]
    pub fn active_kind(&self) -> Option<SlideKind> {
        self.kinds.get(self.active).copied()
    }

    /// How long to wait before auto-advancing, or `None` if autoplay is off.
    #[must_use]
    pub fn dwell_ms(&self) -> Option<u32> {
        if self.kinds.len() < 2 || self.paused || self.reduced_motion {
            return None;
        }
        self.active_kind().map(|kind| match kind {
            SlideKind::Image => IMAGE_DWELL_MS,
            SlideKind::Video => VIDEO_DWELL_MS,
        })
    }

    /// Arrow-key navigation. Returns whether the key was handled.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.kinds.is_empty() {
            return false;
        }
        match key {
            "ArrowLeft" => {
                self.prev();
                true
            }
            "ArrowRight" => {
                self.next();
                true
            }
            _ => false,
        }
    }

    pub fn apply_swipe(&mut self, swipe: Swipe) -> usize {
        match swipe {
            Swipe::Left => self.next(),
            Swipe::Right => self.prev(),
        }
    }

    /// Only the active video slide is allowed to play.
    #[must_use]
    pub fn should_play(&self, index: usize) -> bool {
        index == self.active && self.kinds.get(index) == Some(&SlideKind::Video)
    }
}

/// Finger direction of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Content dragged leftward: go forward.
    Left,
    /// Content dragged rightward: go back.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    delta_x: f64,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.delta_x = 0.0;
    }

    pub fn track(&mut self, x: f64) {
        if let Some(start) = self.start_x {
            self.delta_x = x - start;
        }
    }

    /// Finish the gesture; a swipe only registers past the threshold.
    pub fn end(&mut self) -> Option<Swipe> {
        let started = self.start_x.take().is_some();
        let delta = std::mem::take(&mut self.delta_x);
        if !started || delta.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if delta < 0.0 { Swipe::Left } else { Swipe::Right })
    }
}

/// Environment hints that suppress video entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaEnv {
    pub reduced_motion: bool,
    pub save_data: bool,
}

impl MediaEnv {
    #[must_use]
    pub const fn constrained(self) -> bool {
        self.reduced_motion || self.save_data
    }
}

/// What a slide should render right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation<'a> {
    Still(&'a str),
    Video { src: &'a str, poster: Option<&'a str> },
    /// A video with no poster while inactive or constrained.
    Blank,
}

#[must_use]
pub fn presentation(slide: &Slide, is_active: bool, env: MediaEnv) -> Presentation<'_> {
    if !slide.is_video() {
        return Presentation::Still(&slide.src);
    }
    if is_active && !env.constrained() {
        return Presentation::Video {
            src: &slide.src,
            poster: slide.poster(),
        };
    }
    slide.poster().map_or(Presentation::Blank, Presentation::Still)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundToast {
    On,
    Off,
}

impl SoundToast {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::On => "Sound on",
            Self::Off => "Sound off",
        }
    }
}

/// What the view should do with the `<video>` after a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// Nothing is playing yet: call `play()` with sound.
    StartPlayback,
    SetMuted(bool),
}

/// Playback state for the active video slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoState {
    muted: bool,
    playing: bool,
    autoplay_blocked: bool,
    toast: Option<SoundToast>,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            muted: true,
            playing: false,
            autoplay_blocked: false,
            toast: None,
        }
    }
}

impl VideoState {
    /// Reset when a video slide becomes active; autoplay is always attempted muted.
    pub fn activate(&mut self) {
        *self = Self::default();
    }

    pub fn playback_started(&mut self, from_tap: bool) {
        self.playing = true;
        self.autoplay_blocked = false;
        if from_tap {
            self.muted = false;
            self.toast = Some(SoundToast::On);
        }
    }

    /// The runtime refused to play. Not an error: show the tap prompt.
    pub fn playback_blocked(&mut self) {
        self.playing = false;
        self.autoplay_blocked = true;
    }

    pub fn tap(&mut self) -> TapAction {
        if !self.playing {
            return TapAction::StartPlayback;
        }
        self.muted = !self.muted;
        self.toast = Some(if self.muted {
            SoundToast::Off
        } else {
            SoundToast::On
        });
        TapAction::SetMuted(self.muted)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    #[must_use]
    pub const fn muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub const fn playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub const fn needs_tap(&self) -> bool {
        self.autoplay_blocked
    }

    #[must_use]
    pub const fn toast(&self) -> Option<SoundToast> {
        self.toast
    }
}
