//! Carousel state
//!
//! Shared by the hero banner and the product gallery. The index always wraps
//! modulo the number of items; an empty carousel stays at 0.

use serde::Serialize;

/// Hero banner auto-advance interval
pub const HERO_AUTOPLAY_MS: u64 = 5000;

/// Position within a fixed list of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

/// Template view of a carousel
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    pub len: usize,
    pub prev: usize,
    pub next: usize,
    /// Whether navigation controls are shown
    pub controls: bool,
    /// Client-side auto-advance interval, if any
    pub autoplay_ms: Option<u64>,
}

impl Carousel {
    /// Carousel over `len` items, on the first one
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Carousel positioned from a request parameter; any integer is accepted
    /// and wrapped into range.
    pub fn at(len: usize, requested: Option<i64>) -> Self {
        let index = match (requested, len) {
            (Some(i), len) if len > 0 => i.rem_euclid(len as i64) as usize,
            _ => 0,
        };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one item, wrapping past the last
    pub fn next(self) -> Self {
        self.go_to(self.index + 1)
    }

    /// Step back one item, wrapping before the first
    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        self.go_to(self.index + self.len - 1)
    }

    /// Jump to an item
    pub fn go_to(self, index: usize) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: index % self.len,
            len: self.len,
        }
    }

    pub fn view(&self, autoplay_ms: Option<u64>) -> CarouselView {
        let controls = self.len > 1;
        CarouselView {
            index: self.index,
            len: self.len,
            prev: self.prev().index,
            next: self.next().index,
            controls,
            autoplay_ms: autoplay_ms.filter(|_| controls),
        }
    }
}
