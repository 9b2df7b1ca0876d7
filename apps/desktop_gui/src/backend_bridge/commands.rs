//! Backend commands queued from UI to backend worker.

use shared::{domain::PostId, protocol::NewPost};

use crate::controller::events::Operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    FetchUsers,
    CreatePost { post: NewPost },
    FetchComments { post_id: PostId },
}

impl BackendCommand {
    pub fn operation(&self) -> Operation {
        match self {
            Self::FetchUsers => Operation::FetchUsers,
            Self::CreatePost { .. } => Operation::CreatePost,
            Self::FetchComments { .. } => Operation::FetchComments,
        }
    }
}
