use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::PostId,
    protocol::{Comment, NewPost, Post, User},
};
use tracing::{debug, info};
use url::Url;

pub mod config;
pub mod error;

pub use config::{load_settings, ClientSettings};
pub use error::ApiClientError;

/// The three calls the dashboard chains together.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiClientError>;
    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiClientError>;
    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiClientError>;
}

pub struct HttpDashboardClient {
    http: Client,
    base_url: String,
}

impl HttpDashboardClient {
    pub fn new(base_url: &str) -> Result<Self, ApiClientError> {
        let parsed = Url::parse(base_url).map_err(|source| ApiClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiClientError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }

        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ApiClientError> {
        Self::new(&settings.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardClient {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiClientError> {
        const ENDPOINT: &str = "GET /users";
        let users: Vec<User> = self
            .http
            .get(format!("{}/users", self.base_url))
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(ApiClientError::request(ENDPOINT))?
            .json()
            .await
            .map_err(ApiClientError::request(ENDPOINT))?;
        info!(count = users.len(), "fetched users");
        Ok(users)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, ApiClientError> {
        const ENDPOINT: &str = "POST /posts";
        debug!(user_id = %post.user_id, "creating post");
        let created: Post = self
            .http
            .post(format!("{}/posts", self.base_url))
            .json(post)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(ApiClientError::request(ENDPOINT))?
            .json()
            .await
            .map_err(ApiClientError::request(ENDPOINT))?;
        info!(post_id = %created.id, user_id = %created.user_id, "created post");
        Ok(created)
    }

    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiClientError> {
        const ENDPOINT: &str = "GET /comments";
        let comments: Vec<Comment> = self
            .http
            .get(format!("{}/comments", self.base_url))
            .query(&[("postId", post_id.0)])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(ApiClientError::request(ENDPOINT))?
            .json()
            .await
            .map_err(ApiClientError::request(ENDPOINT))?;
        info!(%post_id, count = comments.len(), "fetched comments");
        Ok(comments)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
