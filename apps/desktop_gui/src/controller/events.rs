//! Backend result events and error modeling for the dashboard controller.

use shared::{
    domain::PostId,
    protocol::{Comment, Post, User},
};

/// One of the three network operations the dashboard chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchUsers,
    CreatePost,
    FetchComments,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::FetchUsers => "fetch_users",
            Self::CreatePost => "create_post",
            Self::FetchComments => "fetch_comments",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::FetchUsers => "Users fetched successfully!",
            Self::CreatePost => "Post created successfully!",
            Self::FetchComments => "Comments fetched successfully!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::FetchUsers => "Error fetching users.",
            Self::CreatePost => "Error creating post.",
            Self::FetchComments => "Error fetching comments.",
        }
    }
}

pub enum UiEvent {
    UsersFetched(Vec<User>),
    PostCreated(Post),
    CommentsFetched {
        post_id: PostId,
        comments: Vec<Comment>,
    },
    Failed(UiError),
}

impl UiEvent {
    pub fn operation(&self) -> Operation {
        match self {
            Self::UsersFetched(_) => Operation::FetchUsers,
            Self::PostCreated(_) => Operation::CreatePost,
            Self::CommentsFetched { .. } => Operation::FetchComments,
            Self::Failed(err) => err.operation(),
        }
    }
}

/// A failed operation. The user only ever sees the operation's fixed message;
/// `detail` carries the underlying cause for logs.
#[derive(Debug, Clone)]
pub struct UiError {
    operation: Operation,
    detail: String,
}

impl UiError {
    pub fn new(operation: Operation, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn message(&self) -> &'static str {
        self.operation.failure_message()
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}
