//! Pure projections of dashboard state into what the panels draw.

use shared::{
    domain::UserId,
    protocol::{Comment, Post, User},
};

use crate::controller::reducer::CommentsPanel;

pub const NO_USERS_PLACEHOLDER: &str = "No users found. Please fetch users first.";
pub const SELECT_USER_DEFAULT: &str = "-- Select a User --";
pub const NO_COMMENTS_PLACEHOLDER: &str = "No Comments Found!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub id: Option<UserId>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserPicker {
    Placeholder(&'static str),
    Options(Vec<UserOption>),
}

pub fn user_picker(users: &[User]) -> UserPicker {
    if users.is_empty() {
        return UserPicker::Placeholder(NO_USERS_PLACEHOLDER);
    }

    let mut options = Vec::with_capacity(users.len() + 1);
    options.push(UserOption {
        id: None,
        label: SELECT_USER_DEFAULT.to_string(),
    });
    options.extend(users.iter().map(|user| UserOption {
        id: Some(user.id),
        label: user.name.clone(),
    }));
    UserPicker::Options(options)
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommentsView<'a> {
    Hidden,
    Empty,
    List(&'a [Comment]),
}

pub fn comments_view(panel: &CommentsPanel) -> CommentsView<'_> {
    match panel {
        CommentsPanel::NotRequested => CommentsView::Hidden,
        CommentsPanel::Requested { comments } if comments.is_empty() => CommentsView::Empty,
        CommentsPanel::Requested { comments } => CommentsView::List(comments),
    }
}

/// Posts are shown as the raw record the API returned.
pub fn post_json(post: &Post) -> String {
    serde_json::to_string_pretty(post).unwrap_or_else(|_| format!("{post:?}"))
}
