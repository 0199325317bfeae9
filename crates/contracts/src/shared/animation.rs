//! Frame arithmetic for the site animations (stat counters, hero carousel,
//! partner marquee). Timers live in the frontend's animation controller;
//! everything here is a pure function of elapsed time.

/// Ease-out cubic on `t` in `[0, 1]`
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown by a stat counter `elapsed_ms` into a `duration_ms` count-up.
/// Never overshoots and lands exactly on `target`.
pub fn counter_frame(target: u64, elapsed_ms: u64, duration_ms: u64) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = ease_out_cubic(elapsed_ms as f64 / duration_ms as f64);
    ((target as f64) * progress).floor().min(target as f64) as u64
}

/// Horizontal offset of a looping marquee track, in `[0, track_width_px)`
pub fn marquee_offset(elapsed_ms: u64, speed_px_per_sec: f64, track_width_px: f64) -> f64 {
    if track_width_px <= 0.0 {
        return 0.0;
    }
    let travelled = elapsed_ms as f64 / 1000.0 * speed_px_per_sec;
    travelled.rem_euclid(track_width_px)
}

/// Slide index of a wrapping carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to a slide (dot navigation); out of range indices are ignored
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_frame_bounds() {
        assert_eq!(counter_frame(12500, 0, 2000), 0);
        assert_eq!(counter_frame(12500, 2000, 2000), 12500);
        assert_eq!(counter_frame(12500, 5000, 2000), 12500);
        assert_eq!(counter_frame(12500, 10, 0), 12500);
    }

    #[test]
    fn test_counter_frame_monotonic() {
        let mut last = 0;
        for ms in (0..=2000).step_by(50) {
            let v = counter_frame(340, ms, 2000);
            assert!(v >= last);
            assert!(v <= 340);
            last = v;
        }
        // ease-out: more than half way at the half time
        assert!(counter_frame(1000, 1000, 2000) > 500);
    }

    #[test]
    fn test_marquee_wraps() {
        assert_eq!(marquee_offset(0, 40.0, 800.0), 0.0);
        assert_eq!(marquee_offset(10_000, 40.0, 800.0), 400.0);
        assert_eq!(marquee_offset(20_000, 40.0, 800.0), 0.0);
        assert_eq!(marquee_offset(20_000, 40.0, 0.0), 0.0);
    }

    #[test]
    fn test_carousel_wraps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.go_to(1), 1);
        assert_eq!(c.go_to(7), 1);
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }
}
