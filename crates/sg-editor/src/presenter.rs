//! Fullscreen presenter state.
//!
//! Holds the slides in presentation order and a cursor into them.
//! Navigation wraps around at both ends. Autoplay is driven externally:
//! the host calls [`Presenter::tick`] with elapsed time and the presenter
//! advances once per interval.

use crate::shortcuts::PresenterAction;
use sg_core::SlideNode;
use std::time::Duration;

/// Space kept free around a slide when scaling it into a viewport.
pub const FIT_PADDING: f32 = 40.0;

#[derive(Debug, Clone)]
pub struct Presenter {
    slides: Vec<SlideNode>,
    index: usize,
    autoplay: bool,
    interval: Duration,
    elapsed: Duration,
}

/// Outcome of handling an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterState {
    Showing(usize),
    Exited,
}

impl Presenter {
    /// Start at `start`; an out-of-range start shows the first slide.
    pub fn new(slides: Vec<SlideNode>, start: usize, interval_secs: u32) -> Self {
        let index = if start < slides.len() { start } else { 0 };
        Self {
            slides,
            index,
            autoplay: false,
            interval: Duration::from_secs(u64::from(interval_secs.max(1))),
            elapsed: Duration::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&SlideNode> {
        self.slides.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + 1) % self.slides.len();
        }
        self.elapsed = Duration::ZERO;
    }

    pub fn prev(&mut self) {
        if !self.slides.is_empty() {
            self.index = (self.index + self.slides.len() - 1) % self.slides.len();
        }
        self.elapsed = Duration::ZERO;
    }

    /// Jump to slide `i`; out-of-range indices are ignored.
    pub fn go_to(&mut self, i: usize) {
        if i < self.slides.len() {
            self.index = i;
            self.elapsed = Duration::ZERO;
        }
    }

    // ─── Autoplay ────────────────────────────────────────────────────────

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn set_autoplay(&mut self, on: bool) {
        self.autoplay = on;
        self.elapsed = Duration::ZERO;
    }

    pub fn toggle_autoplay(&mut self) {
        self.set_autoplay(!self.autoplay);
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Autoplay interval in whole seconds, at least one.
    pub fn set_interval(&mut self, secs: u32) {
        self.interval = Duration::from_secs(u64::from(secs.max(1)));
    }

    /// Advance time. Returns how many slides were advanced.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if !self.autoplay || self.slides.is_empty() {
            return 0;
        }
        self.elapsed += dt;
        let mut advanced = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.slides.len();
            advanced += 1;
        }
        advanced
    }

    // ─── Input ───────────────────────────────────────────────────────────

    pub fn apply(&mut self, action: PresenterAction) -> PresenterState {
        match action {
            PresenterAction::Next => self.next(),
            PresenterAction::Prev => self.prev(),
            PresenterAction::First => self.go_to(0),
            PresenterAction::Last => self.go_to(self.slides.len().saturating_sub(1)),
            PresenterAction::ToggleAutoplay => self.toggle_autoplay(),
            PresenterAction::Exit => {
                self.autoplay = false;
                return PresenterState::Exited;
            }
        }
        PresenterState::Showing(self.index)
    }
}

/// Scale factor that fits a `slide` size into `viewport`, keeping
/// [`FIT_PADDING`] free. Degenerate sizes yield 1.0.
pub fn fit_scale(viewport: (f32, f32), slide: (f32, f32)) -> f32 {
    let avail_w = viewport.0 - FIT_PADDING;
    let avail_h = viewport.1 - FIT_PADDING;
    if avail_w <= 0.0 || avail_h <= 0.0 || slide.0 <= 0.0 || slide.1 <= 0.0 {
        return 1.0;
    }
    (avail_w / slide.0).min(avail_h / slide.1)
}
