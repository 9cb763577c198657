/// Scroll position of a panel that normally sticks to its bottom edge.
///
/// `back` counts lines scrolled up from the bottom; zero means pinned. It
/// never exceeds `max_back`, the number of content lines that do not fit in
/// the panel, so scrolling past the top is not remembered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroller {
    back: usize,
    max_back: usize,
}

impl Scroller {
    pub fn back(&self) -> usize {
        self.back
    }

    pub fn max_back(&self) -> usize {
        self.max_back
    }

    /// Record how many lines of content overflow the panel.
    pub fn set_overflow(&mut self, lines: usize) {
        self.max_back = lines;
        self.back = self.back.min(lines);
    }

    pub fn up(&mut self, lines: usize) {
        self.back = self.back.saturating_add(lines).min(self.max_back);
    }

    pub fn down(&mut self, lines: usize) {
        self.back = self.back.saturating_sub(lines);
    }

    pub fn to_bottom(&mut self) {
        self.back = 0;
    }

    /// First visible line for content of `total` lines in a panel of
    /// `height` lines.
    pub fn top_line(&self, total: usize, height: usize) -> usize {
        let max_top = total.saturating_sub(height);
        max_top.saturating_sub(self.back.min(max_top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overflowing(lines: usize) -> Scroller {
        let mut scroller = Scroller::default();
        scroller.set_overflow(lines);
        scroller
    }

    #[test]
    fn pinned_to_bottom_by_default() {
        let scroller = Scroller::default();
        assert_eq!(scroller.top_line(30, 10), 20);
        assert_eq!(scroller.top_line(5, 10), 0);
    }

    #[test]
    fn scrolling_up_is_clamped_to_top() {
        let mut scroller = overflowing(20);
        scroller.up(7);
        assert_eq!(scroller.top_line(30, 10), 13);
        scroller.up(100);
        assert_eq!(scroller.back(), 20);
        assert_eq!(scroller.top_line(30, 10), 0);
        scroller.to_bottom();
        assert_eq!(scroller.top_line(30, 10), 20);
    }

    #[test]
    fn down_after_overscroll_moves_view() {
        let mut scroller = overflowing(20);
        for _ in 0..5 {
            scroller.up(10);
        }
        scroller.down(1);
        assert_eq!(scroller.top_line(30, 10), 1);
    }

    #[test]
    fn nothing_to_scroll_without_overflow() {
        let mut scroller = Scroller::default();
        scroller.up(3);
        assert_eq!(scroller.back(), 0);
    }

    #[test]
    fn shrinking_overflow_pulls_offset_in() {
        let mut scroller = overflowing(20);
        scroller.up(15);
        scroller.set_overflow(4);
        assert_eq!(scroller.back(), 4);
    }

    #[test]
    fn down_saturates_at_bottom() {
        let mut scroller = overflowing(10);
        scroller.up(2);
        scroller.down(5);
        assert_eq!(scroller.back(), 0);
    }
}
