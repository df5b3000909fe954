//! Timed replay of a scripted conversation.
//!
//! Every tick either starts revealing the next entry (a short "typing" phase
//! followed by the entry itself) or, once the last entry is showing, restarts
//! the script from the top. The tick is re-armed whenever the visible entry
//! changes, so each reveal is followed by a full tick period.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use super::schedule::{Scheduler, TaskHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Presentation hint only; it never affects sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    pub role: Role,
    pub text: String,
    #[serde(default)]
    pub status: Option<EntryStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTimings {
    pub tick_ms: u32,
    pub advance_ms: u32,
}

impl Default for PlaybackTimings {
    fn default() -> Self {
        Self {
            tick_ms: 4_000,
            advance_ms: 1_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Typing indicator on; call [`Sequencer::complete_advance`] after the delay.
    BeginAdvance,
    /// Last entry was showing; back to the first.
    Restart,
    /// Nothing to do (empty script, or an advance is already in flight).
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sequencer {
    len: usize,
    current: usize,
    advancing: bool,
}

impl Sequencer {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            advancing: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn is_advancing(&self) -> bool {
        self.advancing
    }

    pub fn tick(&mut self) -> TickAction {
        if self.len == 0 || self.advancing {
            return TickAction::Idle;
        }
        if self.current + 1 < self.len {
            self.advancing = true;
            TickAction::BeginAdvance
        } else {
            self.current = 0;
            TickAction::Restart
        }
    }

    pub fn complete_advance(&mut self) {
        if !self.advancing {
            return;
        }
        self.advancing = false;
        self.current = (self.current + 1).min(self.len.saturating_sub(1));
    }

    pub fn frame(&self) -> PlaybackFrame {
        PlaybackFrame {
            current: self.current,
            advancing: self.advancing,
        }
    }
}

/// What the chat demo renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackFrame {
    pub current: usize,
    pub advancing: bool,
}

impl PlaybackFrame {
    /// Indices of the entries on screen for a script of `len` entries.
    pub fn visible(&self, len: usize) -> Range<usize> {
        0..len.min(self.current + 1)
    }
}

struct State {
    sequencer: Sequencer,
    scheduler: Rc<dyn Scheduler>,
    timings: PlaybackTimings,
    ticker: Option<TaskHandle>,
    pending_advance: Option<TaskHandle>,
    on_change: Rc<dyn Fn(PlaybackFrame)>,
}

/// Drives a [`Sequencer`] from a [`Scheduler`]. Dropping it stops playback.
pub struct Playback {
    state: Rc<RefCell<State>>,
}

impl Playback {
    pub fn start<F>(
        scheduler: Rc<dyn Scheduler>,
        len: usize,
        timings: PlaybackTimings,
        on_change: F,
    ) -> Self
    where
        F: Fn(PlaybackFrame) + 'static,
    {
        let state = Rc::new(RefCell::new(State {
            sequencer: Sequencer::new(len),
            scheduler,
            timings,
            ticker: None,
            pending_advance: None,
            on_change: Rc::new(on_change),
        }));
        // A single entry would only ever "restart" onto itself.
        if len > 1 {
            arm_ticker(&state);
        }
        Self { state }
    }

    #[cfg(test)]
    pub fn frame(&self) -> PlaybackFrame {
        self.state.borrow().sequencer.frame()
    }
}

impl Drop for Playback {
    fn drop(&mut self) {
        if let Ok(state) = self.state.try_borrow() {
            log::debug!(
                "chat playback stopped at entry {}",
                state.sequencer.current()
            );
        }
    }
}

fn arm_ticker(state: &Rc<RefCell<State>>) {
    let (scheduler, period) = {
        let state = state.borrow();
        (state.scheduler.clone(), state.timings.tick_ms)
    };
    let weak = Rc::downgrade(state);
    let handle = scheduler.repeat(
        period,
        Box::new(move || {
            if let Some(state) = weak.upgrade() {
                on_tick(&state);
            }
        }),
    );
    // Replacing the old handle cancels the previous phase.
    state.borrow_mut().ticker = Some(handle);
}

fn on_tick(state: &Rc<RefCell<State>>) {
    let action = state.borrow_mut().sequencer.tick();
    match action {
        TickAction::BeginAdvance => {
            notify(state);
            let (scheduler, delay) = {
                let state = state.borrow();
                (state.scheduler.clone(), state.timings.advance_ms)
            };
            let weak = Rc::downgrade(state);
            let handle = scheduler.delay(
                delay,
                Box::new(move || {
                    if let Some(state) = weak.upgrade() {
                        on_advance_due(&state);
                    }
                }),
            );
            state.borrow_mut().pending_advance = Some(handle);
        }
        TickAction::Restart => {
            log::debug!("chat playback restarting");
            notify(state);
            arm_ticker(state);
        }
        TickAction::Idle => {}
    }
}

fn on_advance_due(state: &Rc<RefCell<State>>) {
    {
        let mut state = state.borrow_mut();
        state.pending_advance = None;
        state.sequencer.complete_advance();
    }
    notify(state);
    arm_ticker(state);
}

fn notify(state: &Rc<RefCell<State>>) {
    let (frame, on_change) = {
        let state = state.borrow();
        (state.sequencer.frame(), state.on_change.clone())
    };
    on_change(frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::schedule::testing::ManualScheduler;

    fn recorder() -> (Rc<RefCell<Vec<PlaybackFrame>>>, impl Fn(PlaybackFrame)) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        (frames, move |frame: PlaybackFrame| sink.borrow_mut().push(frame))
    }

    fn frame(current: usize, advancing: bool) -> PlaybackFrame {
        PlaybackFrame { current, advancing }
    }

    #[test]
    fn sequencer_advances_then_restarts() {
        let mut seq = Sequencer::new(3);
        assert_eq!(seq.tick(), TickAction::BeginAdvance);
        assert!(seq.is_advancing());
        assert_eq!(seq.tick(), TickAction::Idle);
        seq.complete_advance();
        assert_eq!(seq.current(), 1);
        assert_eq!(seq.frame().visible(3), 0..2);

        seq.tick();
        seq.complete_advance();
        assert_eq!(seq.current(), 2);
        assert_eq!(seq.tick(), TickAction::Restart);
        assert_eq!(seq.current(), 0);
        assert!(!seq.is_advancing());
    }

    #[test]
    fn empty_script_shows_nothing() {
        let mut seq = Sequencer::new(0);
        assert_eq!(seq.tick(), TickAction::Idle);
        assert!(seq.frame().visible(0).is_empty());
        seq.complete_advance();
        assert_eq!(seq.current(), 0);
    }

    #[test]
    fn visible_range_covers_entries_up_to_current() {
        assert_eq!(frame(0, false).visible(3), 0..1);
        assert_eq!(frame(2, true).visible(3), 0..3);
        // A stale frame never reaches past a shorter script.
        assert_eq!(frame(4, false).visible(2), 0..2);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut seq = Sequencer::new(3);
        seq.complete_advance();
        assert_eq!(seq.current(), 0);
    }

    #[test]
    fn one_cycle_reveals_second_entry() {
        let clock = ManualScheduler::new();
        let (frames, sink) = recorder();
        let playback = Playback::start(Rc::new(clock.clone()), 3, PlaybackTimings::default(), sink);

        clock.advance(3_999);
        assert!(frames.borrow().is_empty());
        clock.advance(1);
        assert_eq!(playback.frame(), frame(0, true));
        clock.advance(1_500);
        assert_eq!(playback.frame(), frame(1, false));
        assert_eq!(*frames.borrow(), vec![frame(0, true), frame(1, false)]);
    }

    #[test]
    fn last_entry_restarts_without_typing() {
        let clock = ManualScheduler::new();
        let (frames, sink) = recorder();
        let playback = Playback::start(Rc::new(clock.clone()), 3, PlaybackTimings::default(), sink);

        // Two reveals of 4000 + 1500 each.
        clock.advance(11_000);
        assert_eq!(playback.frame(), frame(2, false));
        clock.advance(4_000);
        assert_eq!(playback.frame(), frame(0, false));
        assert_eq!(frames.borrow().last(), Some(&frame(0, false)));
    }

    #[test]
    fn dropping_playback_cancels_timers() {
        let clock = ManualScheduler::new();
        let (frames, sink) = recorder();
        let playback = Playback::start(Rc::new(clock.clone()), 3, PlaybackTimings::default(), sink);

        clock.advance(4_500);
        assert_eq!(clock.active_tasks(), 2);
        drop(playback);
        assert_eq!(clock.active_tasks(), 0);
        clock.advance(10_000);
        assert_eq!(frames.borrow().len(), 1);
    }

    #[test]
    fn short_scripts_register_no_timer() {
        let clock = ManualScheduler::new();
        let scheduler: Rc<dyn Scheduler> = Rc::new(clock.clone());
        let _empty = Playback::start(scheduler.clone(), 0, PlaybackTimings::default(), |_| {});
        let _single = Playback::start(scheduler, 1, PlaybackTimings::default(), |_| {});
        assert_eq!(clock.active_tasks(), 0);
    }

    #[test]
    fn script_entries_parse_from_json() {
        let entries: Vec<ScriptEntry> = serde_json::from_str(
            r#"[
                {"role": "user", "text": "hi"},
                {"role": "assistant", "text": "thinking", "status": "pending"}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries[0].status, None);
        assert_eq!(entries[1].role, Role::Assistant);
        assert_eq!(entries[1].status, Some(EntryStatus::Pending));
    }
}
