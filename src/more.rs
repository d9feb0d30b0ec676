use super::*;

/// Stand-in for comments the API did not load inline.
#[derive(Debug, Deserialize)]
pub(crate) struct More {
  #[serde(default)]
  pub(crate) count: u64,
}
