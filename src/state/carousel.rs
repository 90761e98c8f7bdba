//! Testimonial carousel state

use super::forms::Cycle;

/// Current position in a fixed, ordered sequence of testimonials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialCarousel {
    len: usize,
    current: usize,
}

impl TestimonialCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance, wrapping from the last entry to the first
    pub fn next(&mut self) {
        self.next_slot();
    }

    /// Go back, wrapping from the first entry to the last
    pub fn prev(&mut self) {
        self.prev_slot();
    }

    /// Jump straight to an entry. Returns false (and stays put) when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }
}

impl Cycle for TestimonialCarousel {
    fn slot_count(&self) -> usize {
        self.len
    }
    fn active_slot(&self) -> usize {
        self.current
    }
    fn set_active_slot(&mut self, index: usize) {
        self.current = index.min(self.len.saturating_sub(1));
    }
}
