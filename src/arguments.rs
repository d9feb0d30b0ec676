use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Dump the newest posts of a subreddit and their top-level comments to CSV"
)]
pub(crate) struct Arguments {
  #[arg(long, env = "REDDIT_CLIENT_ID", hide_env_values = true)]
  client_id: String,
  #[arg(long, env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
  client_secret: String,
  #[arg(long, env = "HARVEST_COMMENTS_OUTPUT")]
  comments_output: Option<PathBuf>,
  /// Submissions loaded at the same time
  #[arg(long, env = "HARVEST_CONCURRENCY", default_value_t = NonZeroUsize::MIN)]
  concurrency: NonZeroUsize,
  /// Maximum number of posts to list
  #[arg(long, env = "HARVEST_LIMIT", default_value_t = 60)]
  limit: usize,
  #[arg(long, env = "HARVEST_POSTS_OUTPUT")]
  posts_output: Option<PathBuf>,
  #[arg(long, env = "HARVEST_SUBREDDIT", default_value = "travel")]
  subreddit: String,
  #[arg(long, env = "REDDIT_USER_AGENT", default_value = USER_AGENT)]
  user_agent: String,
}

impl Arguments {
  pub(crate) fn comments_output(&self) -> PathBuf {
    self.comments_output.clone().unwrap_or_else(|| {
      PathBuf::from(format!("comments_{}.csv", self.subreddit()))
    })
  }

  pub(crate) fn credentials(&self) -> Credentials {
    Credentials {
      client_id: self.client_id.clone(),
      client_secret: self.client_secret.clone(),
      user_agent: self.user_agent.clone(),
    }
  }

  pub(crate) fn posts_output(&self) -> PathBuf {
    self.posts_output.clone().unwrap_or_else(|| {
      PathBuf::from(format!("posts_{}.csv", self.subreddit()))
    })
  }

  pub(crate) async fn run(self) -> Result {
    let client =
      Client::authenticate(&self.credentials(), &Endpoints::default())
        .await
        .context("could not authenticate with reddit")?;

    info!(user_agent = %self.user_agent, "authenticated");

    let harvest =
      Harvest::collect(&client, self.subreddit(), self.limit, self.concurrency)
        .await?;

    harvest.write(&self.posts_output(), &self.comments_output())
  }

  /// Subreddit name without any `r/` prefix.
  pub(crate) fn subreddit(&self) -> &str {
    let name = self.subreddit.trim().trim_start_matches('/');
    name.strip_prefix("r/").unwrap_or(name)
  }
}
