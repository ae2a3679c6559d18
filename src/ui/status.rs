//! Transient status line shown after an operation.
//!
//! A status is a plain value carrying its own expiry; whoever renders it asks
//! [`StatusMessage::is_visible_at`]. A newer status simply replaces the old one.

use crate::ui::messages;
use chrono::{DateTime, Duration, Local};

/// Visibility window used when the configuration does not say otherwise.
pub const DEFAULT_STATUS_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub shown_at: DateTime<Local>,
    pub expires_at: DateTime<Local>,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>, ttl_secs: i64) -> Self {
        Self::at(kind, text, Local::now(), ttl_secs)
    }

    pub fn at(
        kind: StatusKind,
        text: impl Into<String>,
        shown_at: DateTime<Local>,
        ttl_secs: i64,
    ) -> Self {
        // a TTL that does not fit the calendar falls back to the default
        let expires_at = Duration::try_seconds(ttl_secs)
            .and_then(|ttl| shown_at.checked_add_signed(ttl))
            .unwrap_or_else(|| shown_at + Duration::seconds(DEFAULT_STATUS_TTL_SECS));

        Self {
            kind,
            text: text.into(),
            shown_at,
            expires_at,
        }
    }

    pub fn is_visible_at(&self, now: DateTime<Local>) -> bool {
        now < self.expires_at
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Local::now())
    }

    /// Print through the colored message helpers.
    pub fn print(&self) {
        match self.kind {
            StatusKind::Success => messages::success(&self.text),
            StatusKind::Warning => messages::warning(&self.text),
            StatusKind::Error => messages::error(&self.text),
        }
    }
}
