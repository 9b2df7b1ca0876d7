use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{DashboardApi, HttpDashboardClient};
use serde::Serialize;
use shared::{
    domain::{PostId, UserId},
    error::DraftError,
    protocol::{Comment, Post, PostDraft, User},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Chain the dashboard's users -> post -> comments calls from a terminal")]
struct Cli {
    /// Base URL of the REST API (overrides dashboard.toml and environment).
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List users.
    Users,
    /// Create a post for a user.
    CreatePost {
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    /// List comments for a post.
    Comments {
        #[arg(long)]
        post_id: i64,
    },
    /// Fetch users, create a post for one of them, then fetch its comments.
    Chain {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        /// Author; defaults to the first user returned.
        #[arg(long)]
        user_id: Option<i64>,
    },
}

#[derive(Debug, Serialize)]
struct ChainReport {
    users: Vec<User>,
    post: Post,
    comments: Vec<Comment>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = client_core::load_settings();
    if let Some(url) = cli.api_base_url {
        settings.api_base_url = url;
    }
    let client = HttpDashboardClient::from_settings(&settings)
        .context("failed to configure api client")?;

    let output = match cli.command {
        Command::Users => serde_json::to_string_pretty(&client.fetch_users().await?)?,
        Command::CreatePost {
            user_id,
            title,
            body,
        } => {
            let draft = PostDraft { title, body };
            let post = create_post(&client, &draft, UserId(user_id)).await?;
            serde_json::to_string_pretty(&post)?
        }
        Command::Comments { post_id } => {
            serde_json::to_string_pretty(&client.fetch_comments(PostId(post_id)).await?)?
        }
        Command::Chain {
            title,
            body,
            user_id,
        } => {
            let draft = PostDraft { title, body };
            let report = run_chain(&client, &draft, user_id.map(UserId)).await?;
            serde_json::to_string_pretty(&report)?
        }
    };
    println!("{output}");
    Ok(())
}

async fn create_post(api: &dyn DashboardApi, draft: &PostDraft, author: UserId) -> Result<Post> {
    let new_post = draft.to_new_post(Some(author))?;
    Ok(api.create_post(&new_post).await?)
}

async fn run_chain(
    api: &dyn DashboardApi,
    draft: &PostDraft,
    author: Option<UserId>,
) -> Result<ChainReport> {
    // Empty fields are rejected before any request; authorship is resolved below.
    if let Err(err @ DraftError::EmptyFields) = draft.to_new_post(author) {
        return Err(err.into());
    }

    let users = api.fetch_users().await.context("Error fetching users.")?;
    let author = match author {
        Some(id) => users
            .iter()
            .find(|user| user.id == id)
            .map(|user| user.id)
            .ok_or_else(|| anyhow!("user {id} not found among {} users", users.len()))?,
        None => users
            .first()
            .map(|user| user.id)
            .ok_or_else(|| anyhow!("No users found."))?,
    };
    tracing::info!(%author, "selected author");

    let post = create_post(api, draft, author)
        .await
        .context("Error creating post.")?;
    let comments = api
        .fetch_comments(post.id)
        .await
        .context("Error fetching comments.")?;

    Ok(ChainReport {
        users,
        post,
        comments,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use client_core::ApiClientError;
    use shared::{domain::CommentId, protocol::NewPost};

    use super::*;

    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingApi {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    #[async_trait]
    impl DashboardApi for RecordingApi {
        async fn fetch_users(&self) -> Result<Vec<User>, ApiClientError> {
            self.calls.lock().expect("calls lock").push("users");
            Ok(vec![
                User {
                    id: UserId(1),
                    name: "Leanne".to_string(),
                },
                User {
                    id: UserId(2),
                    name: "Ervin".to_string(),
                },
            ])
        }

        async fn create_post(&self, post: &NewPost) -> Result<Post, ApiClientError> {
            self.calls.lock().expect("calls lock").push("create_post");
            Ok(Post {
                id: PostId(101),
                title: post.title.clone(),
                body: post.body.clone(),
                user_id: post.user_id,
            })
        }

        async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiClientError> {
            self.calls.lock().expect("calls lock").push("comments");
            Ok(vec![Comment {
                id: CommentId(1),
                post_id,
                name: "n".to_string(),
                body: "b".to_string(),
            }])
        }
    }

    fn draft(title: &str, body: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn chain_defaults_to_first_user() {
        let api = RecordingApi::default();
        let report = run_chain(&api, &draft("Hi", "World"), None)
            .await
            .expect("chain");

        assert_eq!(report.post.user_id, UserId(1));
        assert_eq!(report.comments[0].post_id, PostId(101));
        assert_eq!(api.calls(), vec!["users", "create_post", "comments"]);
    }

    #[tokio::test]
    async fn chain_uses_requested_author() {
        let api = RecordingApi::default();
        let report = run_chain(&api, &draft("Hi", "World"), Some(UserId(2)))
            .await
            .expect("chain");
        assert_eq!(report.post.user_id, UserId(2));
    }

    #[tokio::test]
    async fn chain_rejects_unknown_author_before_posting() {
        let api = RecordingApi::default();
        let err = run_chain(&api, &draft("Hi", "World"), Some(UserId(9)))
            .await
            .expect_err("must fail");
        assert!(err.to_string().contains("user 9 not found"));
        assert_eq!(api.calls(), vec!["users"]);
    }

    #[tokio::test]
    async fn empty_draft_makes_no_requests() {
        let api = RecordingApi::default();
        let err = run_chain(&api, &draft("", "World"), None)
            .await
            .expect_err("must fail");
        assert_eq!(err.to_string(), "The fields should not be empty!");
        assert!(api.calls().is_empty());
    }
}
