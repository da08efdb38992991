pub const SCROLLED_CLASS: &str = "scrolled";

/// Tracks the vertical scroll offset. The `scrolled` class is derived purely
/// from the latest offset, with no hysteresis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarScroll {
    threshold: f64,
    last_scroll_y: f64,
    scrolled: bool,
}

impl NavbarScroll {
    pub fn new(threshold: f64, initial_scroll_y: f64) -> Self {
        Self {
            threshold,
            last_scroll_y: initial_scroll_y,
            scrolled: false,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scrolled = scroll_y > self.threshold;
        self.last_scroll_y = scroll_y;
        self.scrolled
    }

    #[cfg(test)]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[cfg(test)]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tracks_the_latest_offset_only() {
        let mut navbar = NavbarScroll::new(100.0, 0.0);
        let offsets = [0.0, 50.0, 100.0, 100.5, 400.0, 400.0, 99.0, 101.0, 101.0, 0.0];

        for offset in offsets {
            assert_eq!(navbar.on_scroll(offset), offset > 100.0);
            assert_eq!(navbar.is_scrolled(), offset > 100.0);
            assert_eq!(navbar.last_scroll_y(), offset);
        }
    }

    #[test]
    fn starts_unscrolled_even_when_loaded_mid_page() {
        let navbar = NavbarScroll::new(100.0, 640.0);

        assert!(!navbar.is_scrolled());
        assert_eq!(navbar.last_scroll_y(), 640.0);
    }
}
