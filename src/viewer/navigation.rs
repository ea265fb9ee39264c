use std::time::{Duration, Instant};

/// Slideshow keys after translation from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowRight / ArrowDown.
    Next,
    /// ArrowLeft / ArrowUp.
    Previous,
    /// `f` / `F`.
    ToggleFullscreen,
    /// `g` / `G`.
    OpenGrid,
    /// Escape.
    Escape,
}

/// Cursor over the event list plus overlay flags.
///
/// Time is passed in by the caller so the controls' idle timeout can be
/// driven deterministically.
#[derive(Debug, Clone)]
pub struct Navigator {
    len: usize,
    current: usize,
    fullscreen: bool,
    grid_open: bool,
    controls_shown: bool,
    last_activity: Instant,
    idle_timeout: Duration,
}

impl Navigator {
    /// Start at slide 0 with the grid closed and controls shown.
    pub const fn new(len: usize, idle_timeout: Duration, now: Instant) -> Self {
        Self {
            len,
            current: 0,
            fullscreen: false,
            grid_open: false,
            controls_shown: true,
            last_activity: now,
            idle_timeout,
        }
    }

    /// Index of the slide on screen.
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether fullscreen is on.
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether the grid overlay is open.
    pub const fn is_grid_open(&self) -> bool {
        self.grid_open
    }

    /// Controls are always shown while the grid is open.
    pub const fn controls_visible(&self) -> bool {
        self.grid_open || self.controls_shown
    }

    /// Next slide, wrapping to the first.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    /// Previous slide, wrapping to the last.
    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            tracing::debug!(index, len = self.len, "jump ignored: out of range");
            false
        }
    }

    /// Open the grid overlay; controls stay shown while it is open.
    pub fn open_grid(&mut self) {
        self.grid_open = true;
        self.controls_shown = true;
    }

    /// Close the grid; the idle timer restarts from `now`.
    pub fn close_grid(&mut self, now: Instant) {
        self.grid_open = false;
        self.controls_shown = true;
        self.last_activity = now;
    }

    /// Pick a slide from the grid: jump there and close the grid.
    pub fn select_from_grid(&mut self, index: usize, now: Instant) {
        self.jump_to(index);
        self.close_grid(now);
    }

    /// Flip fullscreen.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Leave fullscreen.
    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    /// Pointer movement shows the controls and restarts the idle timer.
    pub fn pointer_moved(&mut self, now: Instant) {
        if self.grid_open {
            return;
        }
        self.controls_shown = true;
        self.last_activity = now;
    }

    /// Hide the controls once the idle timeout has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self.grid_open || !self.controls_shown {
            return;
        }
        if now.saturating_duration_since(self.last_activity) >= self.idle_timeout {
            self.controls_shown = false;
        }
    }

    /// Apply a slideshow key. While the grid is open only Escape is honoured.
    pub fn handle_key(&mut self, key: NavKey, now: Instant) {
        if self.grid_open && key != NavKey::Escape {
            return;
        }
        match key {
            NavKey::Next => self.advance(),
            NavKey::Previous => self.retreat(),
            NavKey::ToggleFullscreen => self.toggle_fullscreen(),
            NavKey::OpenGrid => self.open_grid(),
            NavKey::Escape => {
                if self.grid_open {
                    self.close_grid(now);
                } else if self.fullscreen {
                    self.exit_fullscreen();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 25;

    fn nav() -> (Navigator, Instant) {
        let now = Instant::now();
        (Navigator::new(N, Duration::from_secs(5), now), now)
    }

    #[test]
    fn test_advance_n_times_is_cyclic() {
        let (mut nav, _) = nav();
        nav.jump_to(7);
        for _ in 0..N {
            nav.advance();
        }
        assert_eq!(nav.current_index(), 7);
    }

    #[test]
    fn test_retreat_n_times_is_cyclic() {
        let (mut nav, _) = nav();
        for _ in 0..N {
            nav.retreat();
        }
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_retreat_from_zero_wraps_to_last() {
        let (mut nav, _) = nav();
        nav.retreat();
        assert_eq!(nav.current_index(), N - 1);
        nav.advance();
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let (mut nav, _) = nav();
        assert!(nav.jump_to(24));
        assert!(!nav.jump_to(25));
        assert_eq!(nav.current_index(), 24);
    }

    #[test]
    fn test_grid_does_not_reset_cursor_and_blocks_keys() {
        let (mut nav, now) = nav();
        nav.jump_to(3);
        nav.handle_key(NavKey::OpenGrid, now);
        assert!(nav.is_grid_open());

        nav.handle_key(NavKey::Next, now);
        nav.handle_key(NavKey::ToggleFullscreen, now);
        assert_eq!(nav.current_index(), 3);
        assert!(!nav.is_fullscreen());

        nav.handle_key(NavKey::Escape, now);
        assert!(!nav.is_grid_open());
        assert_eq!(nav.current_index(), 3);
    }

    #[test]
    fn test_escape_prefers_grid_then_fullscreen() {
        let (mut nav, now) = nav();
        nav.handle_key(NavKey::ToggleFullscreen, now);
        nav.handle_key(NavKey::OpenGrid, now);

        nav.handle_key(NavKey::Escape, now);
        assert!(!nav.is_grid_open());
        assert!(nav.is_fullscreen());

        nav.handle_key(NavKey::Escape, now);
        assert!(!nav.is_fullscreen());
    }

    #[test]
    fn test_controls_hide_after_idle_and_reset_on_move() {
        let (mut nav, start) = nav();
        nav.tick(start + Duration::from_secs(4));
        assert!(nav.controls_visible());

        nav.pointer_moved(start + Duration::from_secs(4));
        nav.tick(start + Duration::from_secs(8));
        assert!(nav.controls_visible());

        nav.tick(start + Duration::from_secs(9));
        assert!(!nav.controls_visible());

        nav.pointer_moved(start + Duration::from_secs(10));
        assert!(nav.controls_visible());
    }

    #[test]
    fn test_controls_forced_visible_in_grid() {
        let (mut nav, start) = nav();
        nav.tick(start + Duration::from_secs(6));
        assert!(!nav.controls_visible());

        nav.open_grid();
        nav.tick(start + Duration::from_secs(60));
        assert!(nav.controls_visible());
    }

    #[test]
    fn test_select_from_grid_jumps_and_closes() {
        let (mut nav, now) = nav();
        nav.open_grid();
        nav.select_from_grid(12, now);
        assert_eq!(nav.current_index(), 12);
        assert!(!nav.is_grid_open());
    }

    #[test]
    fn test_empty_navigator_never_panics() {
        let mut nav = Navigator::new(0, Duration::from_secs(5), Instant::now());
        nav.advance();
        nav.retreat();
        assert!(!nav.jump_to(0));
        assert_eq!(nav.current_index(), 0);
    }
}
