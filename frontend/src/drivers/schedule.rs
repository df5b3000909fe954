//! Cancellable repeating and delayed tasks.
//!
//! Every timer a driver registers comes back as a [`TaskHandle`]. The handle
//! owns the registration: dropping it (or calling [`TaskHandle::cancel`])
//! clears the underlying timer, so a driver that is torn down can never be
//! written to by a stale callback.

use gloo_timers::callback::{Interval, Timeout};

/// Something that can stop a registered timer.
pub trait Cancel {
    fn cancel(self: Box<Self>);
}

/// Owned registration of a scheduled task. Cancels on drop.
pub struct TaskHandle {
    registration: Option<Box<dyn Cancel>>,
}

impl TaskHandle {
    pub fn new(registration: impl Cancel + 'static) -> Self {
        Self {
            registration: Some(Box::new(registration)),
        }
    }

    /// Stops the task. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

pub trait Scheduler {
    /// Runs `task` every `period_ms` until the handle is dropped.
    fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;

    /// Runs `task` once after `after_ms` unless the handle is dropped first.
    fn delay(&self, after_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// `setInterval`/`setTimeout` through gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Cancel for Interval {
    fn cancel(self: Box<Self>) {
        drop(Interval::cancel(*self));
    }
}

impl Cancel for Timeout {
    fn cancel(self: Box<Self>) {
        drop(Timeout::cancel(*self));
    }
}

impl Scheduler for BrowserScheduler {
    fn repeat(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TaskHandle {
        TaskHandle::new(Interval::new(period_ms, move || task()))
    }

    fn delay(&self, after_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        TaskHandle::new(Timeout::new(after_ms, move || task()))
    }
}

#[cfg(test)]
pub mod testing {
    //! A virtual clock for driving timed state machines deterministically.

    use super::{Cancel, Scheduler, TaskHandle};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    enum Job {
        Once(Box<dyn FnOnce()>),
        Repeat { period: u64, task: Box<dyn FnMut()> },
    }

    struct Pending {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        job: Job,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_seq: u64,
        pending: Vec<Pending>,
    }

    impl Clock {
        fn push(&mut self, due: u64, cancelled: Rc<Cell<bool>>, job: Job) {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.pending.push(Pending {
                due,
                seq,
                cancelled,
                job,
            });
        }
    }

    struct Flag(Rc<Cell<bool>>);

    impl Cancel for Flag {
        fn cancel(self: Box<Self>) {
            self.0.set(true);
        }
    }

    /// Tasks fire only when [`ManualScheduler::advance`] moves time past them,
    /// in due order with ties broken by registration order.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Tasks registered and not yet cancelled or finished.
        pub fn active_tasks(&self) -> usize {
            self.clock
                .borrow()
                .pending
                .iter()
                .filter(|p| !p.cancelled.get())
                .count()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    clock.pending.retain(|p| !p.cancelled.get());
                    let due = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    match due {
                        Some(i) => {
                            let pending = clock.pending.remove(i);
                            clock.now = pending.due;
                            pending
                        }
                        None => {
                            clock.now = target;
                            break;
                        }
                    }
                };

                // The clock is not borrowed while a task runs, so tasks may
                // register or cancel other tasks.
                let Pending {
                    due,
                    cancelled,
                    job,
                    ..
                } = next;
                match job {
                    Job::Once(task) => task(),
                    Job::Repeat { period, mut task } => {
                        task();
                        if !cancelled.get() {
                            self.clock.borrow_mut().push(
                                due + period,
                                cancelled,
                                Job::Repeat { period, task },
                            );
                        }
                    }
                }
            }
        }

        fn register(&self, after: u64, job: Job) -> TaskHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + after;
            clock.push(due, cancelled.clone(), job);
            TaskHandle::new(Flag(cancelled))
        }
    }

    impl Scheduler for ManualScheduler {
        fn repeat(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
            let period = u64::from(period_ms.max(1));
            self.register(period, Job::Repeat { period, task })
        }

        fn delay(&self, after_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
            self.register(u64::from(after_ms), Job::Once(task))
        }
    }
}
