use serde::{Deserialize, Serialize};

use crate::{
    domain::{CommentId, DraftField, PostId, UserId},
    error::DraftError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Title => self.title = value.into(),
            DraftField::Body => self.body = value.into(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Body => &self.body,
        }
    }

    /// Turns the draft into a request body for `author`.
    ///
    /// Emptiness is checked before authorship so a blank form always reports
    /// the empty-fields error.
    pub fn to_new_post(&self, author: Option<UserId>) -> Result<NewPost, DraftError> {
        if self.title.is_empty() || self.body.is_empty() {
            return Err(DraftError::EmptyFields);
        }
        let user_id = author.ok_or(DraftError::NoSelectedUser)?;
        Ok(NewPost {
            title: self.title.clone(),
            body: self.body.clone(),
            user_id,
        })
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub name: String,
    pub body: String,
}
