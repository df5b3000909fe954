//! Wrap-around cursor with an optional auto-advance timer.

use std::cell::RefCell;
use std::rc::Rc;

use super::schedule::{Scheduler, TaskHandle};
use super::DriverError;

pub const DEFAULT_INTERVAL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Cursor over `len` items. An empty carousel has no cursor and never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    cursor: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, cursor: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.cursor)
    }

    pub fn next(&mut self) -> Option<Transition> {
        let to = (self.cursor()? + 1) % self.len;
        Some(self.move_to(to, Direction::Forward))
    }

    pub fn previous(&mut self) -> Option<Transition> {
        let from = self.cursor()?;
        let to = (from + self.len - 1) % self.len;
        Some(self.move_to(to, Direction::Backward))
    }

    pub fn select(&mut self, index: usize) -> Result<Transition, DriverError> {
        if index >= self.len {
            return Err(DriverError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let direction = if index >= self.cursor {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.move_to(index, direction))
    }

    fn move_to(&mut self, to: usize, direction: Direction) -> Transition {
        let from = self.cursor;
        self.cursor = to;
        Transition {
            from,
            to,
            direction,
        }
    }
}

struct Rotation {
    carousel: Carousel,
    on_change: Rc<dyn Fn(Transition)>,
}

/// A [`Carousel`] that advances itself on a fixed interval.
///
/// Manual navigation does not touch the timer, so an automatic step may land
/// shortly after a manual one.
pub struct AutoRotation {
    rotation: Rc<RefCell<Rotation>>,
    _ticker: Option<TaskHandle>,
}

impl AutoRotation {
    pub fn start<F>(scheduler: &dyn Scheduler, len: usize, interval_ms: u32, on_change: F) -> Self
    where
        F: Fn(Transition) + 'static,
    {
        let rotation = Rc::new(RefCell::new(Rotation {
            carousel: Carousel::new(len),
            on_change: Rc::new(on_change),
        }));
        let _ticker = (len > 1).then(|| {
            let weak = Rc::downgrade(&rotation);
            scheduler.repeat(
                interval_ms,
                Box::new(move || {
                    if let Some(rotation) = weak.upgrade() {
                        apply(&rotation, Carousel::next);
                    }
                }),
            )
        });
        Self { rotation, _ticker }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.rotation.borrow().carousel.cursor()
    }

    pub fn next(&self) {
        apply(&self.rotation, Carousel::next);
    }

    pub fn previous(&self) {
        apply(&self.rotation, Carousel::previous);
    }

    pub fn select(&self, index: usize) -> Result<(), DriverError> {
        let transition = self.rotation.borrow_mut().carousel.select(index)?;
        notify(&self.rotation, transition);
        Ok(())
    }
}

fn apply(rotation: &Rc<RefCell<Rotation>>, step: fn(&mut Carousel) -> Option<Transition>) {
    let transition = step(&mut rotation.borrow_mut().carousel);
    if let Some(transition) = transition {
        notify(rotation, transition);
    }
}

fn notify(rotation: &Rc<RefCell<Rotation>>, transition: Transition) {
    let on_change = rotation.borrow().on_change.clone();
    on_change(transition);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::schedule::testing::ManualScheduler;
    use proptest::prelude::*;

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = Carousel::new(3);
        carousel.select(2).unwrap();
        let t = carousel.next().unwrap();
        assert_eq!((t.from, t.to, t.direction), (2, 0, Direction::Forward));
        assert_eq!(carousel.cursor(), Some(0));
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.cursor(), Some(2));
        carousel.previous();
        assert_eq!(carousel.cursor(), Some(1));
    }

    #[test]
    fn select_sets_exact_index_and_direction() {
        let mut carousel = Carousel::new(5);
        assert_eq!(carousel.select(3).unwrap().direction, Direction::Forward);
        assert_eq!(carousel.select(1).unwrap().direction, Direction::Backward);
        assert_eq!(carousel.cursor(), Some(1));
        assert_eq!(
            carousel.select(5),
            Err(DriverError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(carousel.cursor(), Some(1));
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.cursor(), None);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.previous(), None);
        assert!(carousel.select(0).is_err());
    }

    #[test]
    fn rotates_on_interval() {
        let clock = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let rotation = AutoRotation::start(&clock, 3, DEFAULT_INTERVAL_MS, {
            let seen = seen.clone();
            move |t: Transition| seen.borrow_mut().push(t.to)
        });

        clock.advance(4_999);
        assert_eq!(rotation.cursor(), Some(0));
        clock.advance(1);
        assert_eq!(rotation.cursor(), Some(1));
        clock.advance(10_000);
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn manual_navigation_keeps_timer_phase() {
        let clock = ManualScheduler::new();
        let rotation = AutoRotation::start(&clock, 4, DEFAULT_INTERVAL_MS, |_| {});

        clock.advance(4_000);
        rotation.select(2).unwrap();
        // The automatic step still lands at 5s, one second after the jump.
        clock.advance(1_000);
        assert_eq!(rotation.cursor(), Some(3));
        rotation.previous();
        assert_eq!(rotation.cursor(), Some(2));
    }

    #[test]
    fn short_carousels_register_no_timer() {
        let clock = ManualScheduler::new();
        let empty = AutoRotation::start(&clock, 0, DEFAULT_INTERVAL_MS, |_| {});
        let _single = AutoRotation::start(&clock, 1, DEFAULT_INTERVAL_MS, |_| {});
        assert_eq!(clock.active_tasks(), 0);
        empty.next();
        assert_eq!(empty.cursor(), None);
    }

    #[test]
    fn dropping_rotation_releases_timer() {
        let clock = ManualScheduler::new();
        let rotation = AutoRotation::start(&clock, 3, DEFAULT_INTERVAL_MS, |_| {});
        assert_eq!(clock.active_tasks(), 1);
        drop(rotation);
        assert_eq!(clock.active_tasks(), 0);
    }

    proptest! {
        #[test]
        fn next_and_previous_are_modular(len in 1usize..20, start in 0usize..20, k in 0usize..60) {
            let start = start % len;

            let mut forward = Carousel::new(len);
            forward.select(start).unwrap();
            for _ in 0..k {
                forward.next();
            }
            prop_assert_eq!(forward.cursor(), Some((start + k) % len));

            let mut backward = Carousel::new(len);
            backward.select(start).unwrap();
            for _ in 0..k {
                backward.previous();
            }
            prop_assert_eq!(backward.cursor(), Some((start + len * k - k) % len));
        }
    }
}
