//! Session controller, its history events and render snapshots.

mod controller;
mod event;
mod snapshot;

pub use controller::{GuessOutcome, SessionController};
pub use event::SessionEvent;
pub use snapshot::SessionSnapshot;
