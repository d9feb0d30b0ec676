#[derive(Clone, Debug)]
pub(crate) struct Endpoints {
  pub(crate) access_token_url: String,
  pub(crate) api_base_url: String,
}

impl Default for Endpoints {
  fn default() -> Self {
    Self {
      access_token_url: "https://www.reddit.com/api/v1/access_token".into(),
      api_base_url: "https://oauth.reddit.com".into(),
    }
  }
}
