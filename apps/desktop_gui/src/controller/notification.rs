//! Single-slot transient notification with an owned auto-dismiss timer.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Auto-dismiss timer for the visible notification. Replacing the handle
/// cancels the old timer: only the handle stored in the slot can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    id: u64,
    deadline: Instant,
}

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationState {
    Hidden,
    Visible {
        notification: Notification,
        timer: TimerHandle,
    },
}

#[derive(Debug)]
pub struct NotificationSlot {
    state: NotificationState,
    ttl: Duration,
    next_timer_id: u64,
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: NotificationState::Hidden,
            ttl,
            next_timer_id: 0,
        }
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn current(&self) -> Option<&Notification> {
        match &self.state {
            NotificationState::Hidden => None,
            NotificationState::Visible { notification, .. } => Some(notification),
        }
    }

    /// Shows `message`, overwriting whatever is visible and restarting the timer.
    pub fn raise(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        if let NotificationState::Visible { timer, .. } = &self.state {
            tracing::debug!(timer_id = timer.id, "cancelled superseded notification timer");
        }
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        self.state = NotificationState::Visible {
            notification: Notification {
                message: message.into(),
                kind,
            },
            timer: TimerHandle {
                id: self.next_timer_id,
                deadline: now + self.ttl,
            },
        };
    }

    pub fn dismiss(&mut self) {
        self.state = NotificationState::Hidden;
    }

    /// Hides the notification once its own timer has elapsed. Returns whether it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.state {
            NotificationState::Visible { timer, .. } if now >= timer.deadline => {
                tracing::debug!(timer_id = timer.id, "notification timer fired");
                self.state = NotificationState::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Time until the visible notification auto-hides.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.state {
            NotificationState::Hidden => None,
            NotificationState::Visible { timer, .. } => {
                Some(timer.deadline.saturating_duration_since(now))
            }
        }
    }
}
