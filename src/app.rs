//! Application state container.
//!
//! All mutable page state lives here behind explicit entry points: the view
//! mode, the theme flag, the synchronized content, the admin session, the
//! contact form state machine, and the current user-visible notice. The
//! rendering layer only reads this state; nothing in the crate touches
//! ambient globals.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{info, warn};

use crate::api::ContentStore;
use crate::cache::CacheStore;
use crate::session::{ActivityEvent, SessionNotice, SessionWatchdog};
use crate::sync::SyncCoordinator;

/// How long a contact-form success or error state is shown before the form
/// returns to idle.
pub const FORM_STATUS_RESET: Duration = Duration::from_secs(3);

/// Which surface is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Portfolio,
    Login,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Contact form submission state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error,
}

/// The public contact form: field values plus submission status.
///
/// Success clears the fields; a failed submit preserves them so the visitor
/// can retry. Terminal states dismiss themselves back to idle after
/// `FORM_STATUS_RESET`.
#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
    status_since: Instant,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: FormStatus::Idle,
            status_since: Instant::now(),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    fn set_status(&mut self, status: FormStatus) {
        self.status = status;
        self.status_since = Instant::now();
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    /// Auto-dismiss a terminal status once its display period has elapsed.
    pub fn poll(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error)
            && self.status_since.elapsed() >= FORM_STATUS_RESET
        {
            self.status = FormStatus::Idle;
        }
    }
}

/// Top-level application state.
pub struct App {
    pub sync: SyncCoordinator,
    pub session: SessionWatchdog,
    pub view: ViewMode,
    pub theme: Theme,
    pub contact_form: ContactForm,
    /// Current user-visible notice, if any.
    pub notice: Option<String>,
    admin_password: String,
}

impl App {
    pub fn new(cache: CacheStore, admin_password: String) -> Self {
        Self {
            sync: SyncCoordinator::new(cache),
            session: SessionWatchdog::new(),
            view: ViewMode::Portfolio,
            theme: Theme::Dark,
            contact_form: ContactForm::new(),
            notice: None,
            admin_password,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    /// Open the admin login surface (or jump straight back in when the
    /// session is still elevated).
    pub fn open_admin(&mut self) {
        self.view = if self.session.is_active() {
            ViewMode::Admin
        } else {
            ViewMode::Login
        };
    }

    /// Compare the supplied credential and elevate the session on a match.
    ///
    /// The credential is a single shared secret checked entirely on the
    /// client; there is no token issuance or server-side verification. A
    /// known limitation carried over from the deployed site.
    pub fn login(&mut self, password: &str) -> bool {
        if password == self.admin_password {
            self.session.activate();
            self.view = ViewMode::Admin;
            info!("Admin login successful");
            true
        } else {
            warn!("Admin login rejected");
            false
        }
    }

    pub fn logout(&mut self) {
        self.session.deactivate();
        self.view = ViewMode::Portfolio;
    }

    /// Forward a user-input event to the session watchdog.
    pub fn observe_activity(&self, event: ActivityEvent) {
        self.session.observe(event);
    }

    /// Apply any pending session expiry: drop privileges, return to the
    /// public view, and surface a notice. Returns true when this call
    /// performed the transition.
    pub fn poll_session(&mut self) -> bool {
        match self.session.poll() {
            Some(SessionNotice::Expired) => {
                self.view = ViewMode::Portfolio;
                self.notice =
                    Some("Session expired due to inactivity. Please log in again.".to_string());
                true
            }
            None => false,
        }
    }

    /// Return from the admin surface to the public view, re-running the
    /// reconciliation so edits are visible without a reload.
    pub async fn leave_admin<S: ContentStore + ?Sized>(&mut self, store: &S) {
        self.view = ViewMode::Portfolio;
        self.sync.refresh(store).await;
    }

    /// Submit the contact form with its current field values.
    pub async fn submit_contact<S: ContentStore + ?Sized>(&mut self, store: &S) {
        self.contact_form.set_status(FormStatus::Sending);

        let result = store
            .save_message(
                &self.contact_form.name,
                &self.contact_form.email,
                &self.contact_form.message,
            )
            .await;

        match result {
            Ok(()) => {
                self.contact_form.set_status(FormStatus::Success);
                self.contact_form.clear_fields();
            }
            Err(e) => {
                warn!(error = %e, "Contact message submit failed");
                self.contact_form.set_status(FormStatus::Error);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
