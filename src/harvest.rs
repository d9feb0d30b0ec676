use super::*;

/// The two tables one run produces.
#[derive(Debug, Default)]
pub(crate) struct Harvest {
  pub(crate) comments: Vec<CommentRow>,
  pub(crate) posts: Vec<PostRow>,
}

impl Harvest {
  /// Lists the newest `limit` posts of `subreddit` and gathers the top-level
  /// comments of each one.
  ///
  /// Submissions are loaded `concurrency` at a time, but rows always come out
  /// in listing order. The first failed request aborts the whole harvest.
  pub(crate) async fn collect(
    client: &Client,
    subreddit: &str,
    limit: usize,
    concurrency: NonZeroUsize,
  ) -> Result<Self> {
    let posts = client.new_posts(subreddit, limit).await?;

    info!(subreddit, posts = posts.len(), "listed new posts");

    let forests = stream::iter(posts.iter().map(|post| async move {
      client.top_level_comments(&post.id).await
    }))
    .buffered(concurrency.get())
    .try_collect::<Vec<_>>()
    .await?;

    let mut harvest = Self::default();

    for (post, comments) in posts.into_iter().zip(forests) {
      debug!(
        post = %post.fullname(),
        comments = comments.len(),
        "collected comments"
      );

      harvest
        .comments
        .extend(comments.into_iter().map(CommentRow::from));

      harvest.posts.push(PostRow::from(post));
    }

    info!(
      subreddit,
      comments = harvest.comments.len(),
      "collected top-level comments"
    );

    Ok(harvest)
  }

  pub(crate) fn write(
    &self,
    posts_path: &Path,
    comments_path: &Path,
  ) -> Result {
    table::write(posts_path, &self.posts)?;

    info!(
      path = %posts_path.display(),
      rows = self.posts.len(),
      "wrote posts"
    );

    table::write(comments_path, &self.comments)?;

    info!(
      path = %comments_path.display(),
      rows = self.comments.len(),
      "wrote comments"
    );

    Ok(())
  }
}
