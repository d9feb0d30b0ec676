use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Post {
  #[serde(default, deserialize_with = "deserialize_author")]
  pub(crate) author: Option<String>,
  pub(crate) created_utc: f64,
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) num_comments: u64,
  #[serde(default)]
  pub(crate) score: i64,
  #[serde(default, deserialize_with = "deserialize_text")]
  pub(crate) selftext: String,
  pub(crate) subreddit: String,
  #[serde(deserialize_with = "deserialize_text")]
  pub(crate) title: String,
  #[serde(default, deserialize_with = "deserialize_text")]
  pub(crate) url: String,
}

impl Post {
  /// Type-prefixed id, the form comments use for `link_id` and `parent_id`.
  pub(crate) fn fullname(&self) -> String {
    format!("t3_{}", self.id)
  }
}
