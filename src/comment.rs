use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Comment {
  #[serde(default, deserialize_with = "deserialize_author")]
  pub(crate) author: Option<String>,
  #[serde(default, deserialize_with = "deserialize_text")]
  pub(crate) body: String,
  pub(crate) created_utc: f64,
  pub(crate) id: String,
  pub(crate) link_id: String,
  pub(crate) parent_id: String,
  #[serde(default)]
  pub(crate) score: i64,
}

impl Comment {
  pub(crate) fn is_top_level(&self) -> bool {
    self.parent_id == self.link_id
  }
}
