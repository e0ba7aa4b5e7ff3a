use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Sliding window over an ordered list of `len` items, `visible_count` wide.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    index: usize,
    direction: Direction,
    autoplay: bool,
    visible_count: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize, visible_count: usize) -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
            autoplay: true,
            visible_count: visible_count.max(1),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.visible_count)
    }

    /// Range of item positions currently on screen.
    pub fn window(&self) -> std::ops::Range<usize> {
        self.index..(self.index + self.visible_count).min(self.len)
    }

    pub fn advance(&mut self, direction: Direction) {
        let max = self.max_index();
        self.direction = direction;
        self.index = match direction {
            Direction::Forward if self.index >= max => 0,
            Direction::Forward => self.index + 1,
            Direction::Backward if self.index == 0 => max,
            Direction::Backward => self.index - 1,
        };
    }

    pub fn go_to(&mut self, index: usize) {
        let target = index.min(self.max_index());
        self.direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
    }

    pub fn pause(&mut self) {
        self.autoplay = false;
    }

    pub fn resume(&mut self) {
        self.autoplay = true;
    }

    /// One autoplay step. Does nothing while paused.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay {
            return false;
        }
        self.advance(Direction::Forward);
        true
    }

    /// Changes on every pause, resume, move and resize. The autoplay timer is
    /// re-armed whenever it changes, so the next step is always a full
    /// period away.
    pub fn autoplay_key(&self) -> (bool, usize, usize) {
        (self.autoplay, self.index, self.visible_count)
    }

    /// Maps a keyboard key to a step. Arrows are mirrored for RTL reading.
    pub fn key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => self.advance(Direction::Forward),
            "ArrowRight" => self.advance(Direction::Backward),
            _ => return false,
        }
        true
    }

    pub fn set_visible_count(&mut self, visible_count: usize) {
        self.visible_count = visible_count.max(1);
        self.index = self.index.min(self.max_index());
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
    Key(String),
    Pause,
    Resume,
    Tick,
    Resize(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => next.advance(Direction::Forward),
            CarouselAction::Prev => next.advance(Direction::Backward),
            CarouselAction::GoTo(index) => next.go_to(index),
            CarouselAction::Key(key) => {
                if !next.key(&key) {
                    return self;
                }
            }
            CarouselAction::Pause => next.pause(),
            CarouselAction::Resume => next.resume(),
            CarouselAction::Tick => {
                if !next.tick() {
                    return self;
                }
            }
            CarouselAction::Resize(count) => {
                if count == next.visible_count {
                    return self;
                }
                next.set_visible_count(count);
            }
        }
        Rc::new(next)
    }
}

/// Star fill flags for a rating; ratings outside `0..=5` are clamped.
pub fn star_fill(rating: i32) -> [bool; 5] {
    let filled = rating.clamp(0, 5) as usize;
    let mut stars = [false; 5];
    for star in stars.iter_mut().take(filled) {
        *star = true;
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        let mut c = Carousel::new(4, 3);
        assert_eq!(c.max_index(), 1);
        c.advance(Direction::Forward);
        assert_eq!(c.index(), 1);
        c.advance(Direction::Forward);
        assert_eq!(c.index(), 0);
        c.advance(Direction::Backward);
        assert_eq!(c.index(), 1);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn index_stays_in_bounds_for_mixed_sequences() {
        for visible in 1..=3 {
            let mut c = Carousel::new(4, visible);
            let steps = [
                Direction::Forward,
                Direction::Backward,
                Direction::Backward,
                Direction::Forward,
                Direction::Forward,
                Direction::Forward,
                Direction::Forward,
                Direction::Backward,
            ];
            for (n, step) in steps.iter().cycle().take(40).enumerate() {
                c.advance(*step);
                assert!(c.index() <= c.max_index(), "step {n} visible {visible}");
            }
        }
    }

    #[test]
    fn window_shorter_than_visible_count_never_moves() {
        let mut c = Carousel::new(2, 3);
        assert_eq!(c.max_index(), 0);
        c.advance(Direction::Forward);
        c.advance(Direction::Backward);
        assert_eq!(c.index(), 0);
        assert_eq!(c.window(), 0..2);
    }

    #[test]
    fn keys_are_mirrored_for_rtl() {
        let mut c = Carousel::new(4, 1);
        assert!(c.key("ArrowLeft"));
        assert_eq!(c.index(), 1);
        assert!(c.key("ArrowRight"));
        assert_eq!(c.index(), 0);
        assert!(!c.key("Enter"));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn paused_autoplay_never_advances() {
        let mut c = Carousel::new(4, 1);
        c.pause();
        for _ in 0..3 {
            assert!(!c.tick());
        }
        assert_eq!(c.index(), 0);
        c.resume();
        assert!(c.tick());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn timer_key_changes_on_pause_resume_and_moves() {
        let mut c = Carousel::new(4, 1);
        let mut last = c.autoplay_key();
        let steps: [fn(&mut Carousel); 6] = [
            |c| c.pause(),
            |c| c.resume(),
            |c| c.advance(Direction::Forward),
            |c| c.advance(Direction::Backward),
            |c| c.go_to(2),
            |c| c.set_visible_count(2),
        ];
        for step in steps {
            step(&mut c);
            let key = c.autoplay_key();
            assert_ne!(key, last);
            last = key;
        }
    }

    #[test]
    fn each_tick_rearms_the_timer() {
        let mut c = Carousel::new(4, 1);
        let before = c.autoplay_key();
        c.tick();
        assert_ne!(c.autoplay_key(), before);
    }

    #[test]
    fn resize_clamps_index_to_new_max() {
        let mut c = Carousel::new(4, 1);
        c.go_to(3);
        assert_eq!(c.index(), 3);
        c.set_visible_count(3);
        assert_eq!(c.index(), 1);
        assert_eq!(c.window(), 1..4);
    }

    #[test]
    fn go_to_sets_direction_and_clamps() {
        let mut c = Carousel::new(4, 2);
        c.go_to(9);
        assert_eq!(c.index(), 2);
        assert_eq!(c.direction(), Direction::Forward);
        c.go_to(0);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn reducer_tick_respects_pause() {
        let c = Rc::new(Carousel::new(4, 1));
        let c = c.reduce(CarouselAction::Pause);
        let c = c.reduce(CarouselAction::Tick);
        assert_eq!(c.index(), 0);
        let c = c.reduce(CarouselAction::Resume);
        let c = c.reduce(CarouselAction::Tick);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn stars_are_clamped() {
        assert_eq!(star_fill(4), [true, true, true, true, false]);
        assert_eq!(star_fill(9), [true; 5]);
        assert_eq!(star_fill(-2), [false; 5]);
    }
}
