use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_base_url: String,
  client: reqwest::Client,
  token: String,
}

impl Client {
  const MAX_PAGE_SIZE: usize = 100;

  /// Runs the application-only OAuth grant and keeps the bearer token.
  pub(crate) async fn authenticate(
    credentials: &Credentials,
    endpoints: &Endpoints,
  ) -> Result<Self> {
    // A missing subreddit redirects to the search page instead of failing.
    let client = reqwest::Client::builder()
      .user_agent(credentials.user_agent.as_str())
      .redirect(reqwest::redirect::Policy::none())
      .build()?;

    let access_token = client
      .post(&endpoints.access_token_url)
      .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
      .form(&[("grant_type", "client_credentials")])
      .send()
      .await?
      .error_for_status()?
      .json::<AccessToken>()
      .await?;

    debug!(expires_in = access_token.expires_in, "received access token");

    Ok(Self {
      api_base_url: endpoints.api_base_url.trim_end_matches('/').to_string(),
      client,
      token: access_token.into_token()?,
    })
  }

  async fn get<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, String)],
  ) -> Result<T> {
    let response = self
      .client
      .get(format!("{}{path}", self.api_base_url))
      .bearer_auth(&self.token)
      .query(&[("raw_json", "1")])
      .query(query)
      .send()
      .await?;

    let status = response.status();

    ensure!(status.is_success(), "{path} answered {status}");

    Ok(response.json::<T>().await?)
  }

  /// Lists the newest posts of `subreddit`, newest first, never more than
  /// `limit` of them.
  pub(crate) async fn new_posts(
    &self,
    subreddit: &str,
    limit: usize,
  ) -> Result<Vec<Post>> {
    let path = format!("/r/{subreddit}/new");

    let mut posts = Vec::with_capacity(limit);
    let mut after = None::<String>;

    while posts.len() < limit {
      let remaining = limit - posts.len();

      let mut query =
        vec![("limit", remaining.min(Self::MAX_PAGE_SIZE).to_string())];

      if let Some(after) = &after {
        query.push(("after", after.clone()));
      }

      let listing = self
        .get::<Listing>(&path, &query)
        .await
        .with_context(|| format!("failed to list new posts in r/{subreddit}"))?;

      let page = listing
        .data
        .children
        .into_iter()
        .filter_map(Thing::into_post)
        .take(remaining)
        .collect::<Vec<_>>();

      debug!(
        subreddit,
        after = after.as_deref(),
        posts = page.len(),
        "fetched listing page"
      );

      if page.is_empty() {
        break;
      }

      posts.extend(page);

      match listing.data.after {
        Some(next) => after = Some(next),
        None => break,
      }
    }

    Ok(posts)
  }

  /// Loads a submission and returns the comments directly under it.
  ///
  /// Placeholder nodes are discarded, not expanded.
  pub(crate) async fn top_level_comments(
    &self,
    post_id: &str,
  ) -> Result<Vec<Comment>> {
    let (_submission, forest) = self
      .get::<(Listing, Listing)>(&format!("/comments/{post_id}"), &[])
      .await
      .with_context(|| format!("failed to load submission {post_id}"))?;

    let (comments, placeholders) = forest.top_level_comments();

    if placeholders.nodes > 0 {
      debug!(
        post_id,
        nodes = placeholders.nodes,
        hidden = placeholders.hidden,
        "discarded placeholder comments"
      );
    }

    Ok(comments)
  }
}
