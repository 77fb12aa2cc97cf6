use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

/// Idle period after which an admin session is forcibly terminated.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// How often the watchdog compares idle time against the timeout.
/// 10 seconds keeps expiry reasonably precise without busy-checking.
pub const ACTIVITY_CHECK_INTERVAL: Duration = Duration::from_secs(10);

/// Buffer size for the notice channel. Expiry produces a single notice per
/// activation, so a small buffer has plenty of headroom.
const NOTICE_CHANNEL_SIZE: usize = 4;

/// Whether an elevated (admin) session is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Inactive,
}

/// User-input event classes that count as activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    PointerMove,
    KeyPress,
    Click,
    Scroll,
}

/// Notices emitted by the background watcher task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionNotice {
    /// The session exceeded the inactivity threshold and must drop back to
    /// the public view.
    Expired,
}

/// Inactivity watchdog for the elevated session.
///
/// `activate` records the activity timestamp and spawns one periodic check
/// task; `observe` refreshes the timestamp on any user-input event; `poll`
/// drains expiry notices (and tears the watcher down when one arrives).
/// Activation always clears the previous watcher first, so toggling the
/// admin state never accumulates timers or stale notices.
pub struct SessionWatchdog {
    timeout: Duration,
    last_activity: Arc<Mutex<Instant>>,
    watcher: Option<JoinHandle<()>>,
    notices_tx: mpsc::Sender<SessionNotice>,
    notices_rx: mpsc::Receiver<SessionNotice>,
}

impl SessionWatchdog {
    pub fn new() -> Self {
        let (notices_tx, notices_rx) = mpsc::channel(NOTICE_CHANNEL_SIZE);
        Self {
            timeout: SESSION_TIMEOUT,
            last_activity: Arc::new(Mutex::new(Instant::now())),
            watcher: None,
            notices_tx,
            notices_rx,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.watcher.is_some() {
            SessionState::Active
        } else {
            SessionState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == SessionState::Active
    }

    /// Enter the active state and start the periodic inactivity check.
    pub fn activate(&mut self) {
        // Replace, never stack: clear any previous watcher and drain stale
        // notices it may have emitted before it was stopped.
        self.deactivate();
        while self.notices_rx.try_recv().is_ok() {}

        *self.last_activity.lock().unwrap() = Instant::now();

        let last_activity = Arc::clone(&self.last_activity);
        let notices = self.notices_tx.clone();
        let timeout = self.timeout;

        self.watcher = Some(tokio::spawn(async move {
            let mut interval = time::interval(ACTIVITY_CHECK_INTERVAL);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let idle = last_activity.lock().unwrap().elapsed();
                if idle > timeout {
                    debug!(idle_secs = idle.as_secs(), "Inactivity threshold exceeded");
                    if notices.send(SessionNotice::Expired).await.is_err() {
                        warn!("Session notice channel closed");
                    }
                    break;
                }
            }
        }));

        info!("Admin session active, inactivity watchdog armed");
    }

    /// Record a user-input event. Ignored while inactive.
    pub fn observe(&self, event: ActivityEvent) {
        if self.is_active() {
            debug!(?event, "Session activity observed");
            *self.last_activity.lock().unwrap() = Instant::now();
        }
    }

    /// Leave the active state, stopping the periodic check.
    pub fn deactivate(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
            debug!("Session watcher stopped");
        }
    }

    /// Drain pending notices from the watcher task.
    ///
    /// On expiry the watchdog deactivates itself and reports it exactly
    /// once; the caller is responsible for the view transition and the
    /// user-visible notice.
    pub fn poll(&mut self) -> Option<SessionNotice> {
        match self.notices_rx.try_recv() {
            Ok(notice) => {
                self.deactivate();
                Some(notice)
            }
            Err(_) => None,
        }
    }
}

impl Default for SessionWatchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionWatchdog {
    fn drop(&mut self) {
        self.deactivate();
    }
}

// ============================================================================
// Tests
// ============================================================================
