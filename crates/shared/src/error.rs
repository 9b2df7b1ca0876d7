use thiserror::Error;

/// Client-side validation failures, raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("The fields should not be empty!")]
    EmptyFields,
    #[error("Select a user before creating a post.")]
    NoSelectedUser,
}
