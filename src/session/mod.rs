//! Admin session management.
//!
//! The elevated (admin) session is guarded by an inactivity watchdog: while
//! active it observes user input events and forces the session back to the
//! public view after a fixed idle period. Leaving the active state always
//! tears down the watcher task, so repeated login/logout cycles never stack
//! timers.

pub mod watchdog;

pub use watchdog::{
    ActivityEvent, SessionNotice, SessionState, SessionWatchdog, ACTIVITY_CHECK_INTERVAL,
    SESSION_TIMEOUT,
};
