//! State machines behind the landing page's interactive pieces.
//!
//! Nothing in here touches the DOM or Yew. Each driver owns one piece of
//! state and is its only writer; the components subscribe to changes and
//! re-render. Timed drivers take a [`schedule::Scheduler`] so the same code
//! runs on browser timers and on a virtual clock in tests.

pub mod carousel;
pub mod playback;
pub mod progress;
pub mod schedule;
pub mod scroll_spy;
pub mod toggle;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DriverError {
    #[error("no navigation sections configured")]
    NoSections,
    #[error("navigation section `{0}` is listed more than once")]
    DuplicateSection(String),
    #[error("index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
