//! Contact messages and the derived dashboard aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message submitted through the public contact form.
///
/// Created only by visitors; the admin can mark it read or delete it but
/// never creates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub sender: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Read-only counts shown on the admin overview.
///
/// Computed by the remote content store from the live collections; never
/// persisted locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub messages_received: usize,
    pub projects_count: usize,
    pub skills_count: usize,
    pub experiences_count: usize,
    /// Human-readable timestamp of the last successful sync.
    pub last_sync: String,
}
