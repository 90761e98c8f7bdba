//! FAQ accordion state

use super::forms::Cycle;

/// At most one open entry in a fixed list of question/answer pairs.
/// The cursor tracks keyboard highlight and is independent of which entry is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
    cursor: usize,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: None,
            cursor: 0,
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close the entry if it is open, otherwise open it and close any other
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_at_cursor(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn cursor_down(&mut self) {
        self.next_slot();
    }

    pub fn cursor_up(&mut self) {
        self.prev_slot();
    }
}

impl Cycle for FaqAccordion {
    fn slot_count(&self) -> usize {
        self.len
    }
    fn active_slot(&self) -> usize {
        self.cursor
    }
    fn set_active_slot(&mut self, index: usize) {
        self.cursor = index.min(self.len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let faq = FaqAccordion::new(5);
        assert_eq!(faq.open_index(), None);
        assert!((0..5).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn test_toggle_opens() {
        let mut faq = FaqAccordion::new(5);
        faq.toggle(2);
        assert_eq!(faq.open_index(), Some(2));
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut faq = FaqAccordion::new(5);
        faq.toggle(1);
        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));
        assert_eq!(faq.open_index(), Some(3));
    }

    #[test]
    fn test_toggle_open_entry_closes_it() {
        let mut faq = FaqAccordion::new(5);
        faq.toggle(4);
        faq.toggle(4);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(0);
        faq.toggle(7);
        assert_eq!(faq.open_index(), Some(0));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut faq = FaqAccordion::new(3);
        faq.cursor_up();
        assert_eq!(faq.cursor(), 2);
        faq.cursor_down();
        assert_eq!(faq.cursor(), 0);
    }

    #[test]
    fn test_toggle_at_cursor() {
        let mut faq = FaqAccordion::new(3);
        faq.cursor_down();
        faq.toggle_at_cursor();
        assert!(faq.is_open(1));
        faq.toggle_at_cursor();
        assert_eq!(faq.open_index(), None);
    }
}
