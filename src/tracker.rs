//! Scroll-synchronized section tracking for snap-scrolling containers.
//!
//! The tracker maps a continuous scroll offset onto a discrete section
//! index and keeps that index consistent with programmatic navigation.
//! Two sources mutate the state: organic scroll notifications and
//! `jump`/`next`/`prev` calls. While a programmatic scroll is in flight
//! (the settle window) organic recomputation is suppressed, otherwise the
//! two would fight over `current_section` mid-animation.
//!
//! Everything runs on the host's single event thread; the settle window is
//! an `Instant` deadline rather than a timer callback, checked lazily on
//! the next notification.

use std::time::{Duration, Instant};

/// Sink for programmatic scroll commands. Production code backs this with
/// a real scrolling container; tests use a recording stub and feed the
/// tracker synthetic offsets.
pub trait ScrollSurface {
    /// Smooth-scroll so the section at `index` aligns with the viewport.
    fn scroll_to_section(&mut self, index: usize);
}

/// How long a programmatic smooth scroll is given to settle before organic
/// scroll events are honored again.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(500);

pub struct SectionTracker<S> {
    surface: S,
    total_sections: usize,
    /// Extent of one snap section along the scroll axis (viewport height
    /// for vertical snap containers).
    section_extent: f64,
    current: usize,
    settle: Duration,
    adjusting_until: Option<Instant>,
}

impl<S: ScrollSurface> SectionTracker<S> {
    pub fn new(surface: S, total_sections: usize, section_extent: f64) -> Self {
        Self {
            surface,
            total_sections,
            section_extent,
            current: 0,
            settle: DEFAULT_SETTLE,
            adjusting_until: None,
        }
    }

    /// Override the settle window (tests use short ones).
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn current_section(&self) -> usize {
        self.current
    }

    pub fn total_sections(&self) -> usize {
        self.total_sections
    }

    /// True exactly while a programmatic scroll is in flight.
    pub fn is_adjusting(&self) -> bool {
        self.adjusting_until
            .is_some_and(|deadline| Instant::now() < deadline)
    }

    /// The viewport was resized; subsequent offsets are measured against
    /// the new extent.
    pub fn set_section_extent(&mut self, extent: f64) {
        self.section_extent = extent;
    }

    /// Organic scroll notification. Recomputes the nearest section boundary
    /// unless a programmatic scroll is settling. Returns whether
    /// `current_section` changed, so callers can skip redundant updates;
    /// repeated identical offsets are no-ops.
    pub fn handle_scroll(&mut self, offset: f64) -> bool {
        if self.is_adjusting() || self.total_sections == 0 || self.section_extent <= 0.0 {
            return false;
        }
        let nearest = (offset / self.section_extent).round().max(0.0) as usize;
        let nearest = nearest.min(self.total_sections - 1);
        if nearest == self.current {
            return false;
        }
        self.current = nearest;
        true
    }

    /// Programmatic navigation to `index`. Updates `current_section`
    /// optimistically, issues the smooth scroll, and opens the settle
    /// window. Out-of-range indices are a no-op, not an error; callers are
    /// expected to guard bounds but the tracker defends independently.
    /// A second `jump` before the previous one settles supersedes it.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.total_sections {
            return false;
        }
        self.current = index;
        self.adjusting_until = Some(Instant::now() + self.settle);
        self.surface.scroll_to_section(index);
        true
    }

    /// Advance one section; no-op at the last section.
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.total_sections {
            return false;
        }
        self.jump(self.current + 1)
    }

    /// Go back one section; no-op at the first section.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.jump(self.current - 1)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
