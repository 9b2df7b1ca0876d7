//! Dashboard view state and its transitions.
//!
//! Every user action either mutates local state or yields a [`BackendCommand`]
//! for the worker; every worker result comes back as a [`UiEvent`] through
//! [`DashboardState::apply`]. Callers pass the current `Instant` to anything
//! that touches the notification timer.

use std::time::{Duration, Instant};

use shared::{
    domain::{DraftField, PostId, UserId},
    protocol::{Comment, Post, PostDraft, User},
};
use tracing::{info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{Operation, UiEvent},
    notification::{Notification, NotificationKind, NotificationSlot},
};

/// Requests queued but not yet resolved, counted per operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    fetch_users: u32,
    create_post: u32,
    fetch_comments: u32,
}

impl InFlight {
    fn counter(&mut self, operation: Operation) -> &mut u32 {
        match operation {
            Operation::FetchUsers => &mut self.fetch_users,
            Operation::CreatePost => &mut self.create_post,
            Operation::FetchComments => &mut self.fetch_comments,
        }
    }

    fn begin(&mut self, operation: Operation) {
        *self.counter(operation) += 1;
    }

    fn finish(&mut self, operation: Operation) {
        let counter = self.counter(operation);
        *counter = counter.saturating_sub(1);
    }

    pub fn count(&self, operation: Operation) -> u32 {
        match operation {
            Operation::FetchUsers => self.fetch_users,
            Operation::CreatePost => self.create_post,
            Operation::FetchComments => self.fetch_comments,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.fetch_users + self.create_post + self.fetch_comments > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentsPanel {
    NotRequested,
    /// Shown from the moment comments are requested; holds the last result.
    Requested { comments: Vec<Comment> },
}

#[derive(Debug)]
pub struct DashboardState {
    users: Vec<User>,
    selected_user: Option<UserId>,
    draft: PostDraft,
    posts: Vec<Post>,
    comments: CommentsPanel,
    in_flight: InFlight,
    error: Option<String>,
    notification: NotificationSlot,
    scroll_to_latest: bool,
}

impl DashboardState {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            users: Vec::new(),
            selected_user: None,
            draft: PostDraft::default(),
            posts: Vec::new(),
            comments: CommentsPanel::NotRequested,
            in_flight: InFlight::default(),
            error: None,
            notification: NotificationSlot::new(notification_ttl),
            scroll_to_latest: false,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected_user?;
        self.users.iter().find(|user| user.id == id)
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Created posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn latest_post_id(&self) -> Option<PostId> {
        self.posts.first().map(|post| post.id)
    }

    pub fn comments(&self) -> &CommentsPanel {
        &self.comments
    }

    pub fn in_flight(&self) -> InFlight {
        self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_busy()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub fn notification_remaining(&self, now: Instant) -> Option<Duration> {
        self.notification.remaining(now)
    }

    pub fn fetch_users(&mut self) -> BackendCommand {
        self.begin(Operation::FetchUsers);
        BackendCommand::FetchUsers
    }

    /// `None`, or an id not in the current list, clears the selection.
    pub fn select_user(&mut self, id: Option<UserId>) {
        self.selected_user = id.filter(|id| self.users.iter().any(|user| user.id == *id));
    }

    pub fn update_draft(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validates the draft; on failure raises the error and yields no command.
    pub fn create_post(&mut self, now: Instant) -> Option<BackendCommand> {
        match self.draft.to_new_post(self.selected_user) {
            Ok(post) => {
                self.begin(Operation::CreatePost);
                Some(BackendCommand::CreatePost { post })
            }
            Err(err) => {
                warn!(operation = Operation::CreatePost.name(), "rejected post draft: {err}");
                self.record_error(err.to_string(), now);
                None
            }
        }
    }

    pub fn fetch_comments(&mut self, post_id: PostId) -> BackendCommand {
        if self.comments == CommentsPanel::NotRequested {
            self.comments = CommentsPanel::Requested {
                comments: Vec::new(),
            };
        }
        self.begin(Operation::FetchComments);
        BackendCommand::FetchComments { post_id }
    }

    pub fn apply(&mut self, event: UiEvent, now: Instant) {
        let operation = event.operation();
        self.in_flight.finish(operation);

        match event {
            UiEvent::UsersFetched(users) => {
                self.users = users;
                self.selected_user = self
                    .selected_user
                    .filter(|id| self.users.iter().any(|user| user.id == *id));
                info!(count = self.users.len(), "users loaded");
            }
            UiEvent::PostCreated(post) => {
                info!(post_id = %post.id, "post prepended");
                self.posts.insert(0, post);
                self.scroll_to_latest = true;
            }
            UiEvent::CommentsFetched { post_id, comments } => {
                info!(%post_id, count = comments.len(), "comments loaded");
                self.comments = CommentsPanel::Requested { comments };
            }
            UiEvent::Failed(err) => {
                warn!(
                    operation = operation.name(),
                    error = err.detail(),
                    "dashboard operation failed"
                );
                self.record_error(err.message(), now);
                return;
            }
        }

        self.notification
            .raise(operation.success_message(), NotificationKind::Success, now);
    }

    /// Unwinds an operation whose command never reached the worker.
    pub fn abort_dispatch(&mut self, operation: Operation, now: Instant) {
        self.in_flight.finish(operation);
        self.record_error(operation.failure_message(), now);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    /// Advances the notification timer. Returns whether the notification hid.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notification.expire(now)
    }

    /// One-shot request to bring the newest post into view.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_latest)
    }

    fn begin(&mut self, operation: Operation) {
        self.error = None;
        self.in_flight.begin(operation);
    }

    fn record_error(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        self.notification
            .raise(message.clone(), NotificationKind::Error, now);
        self.error = Some(message);
    }
}
