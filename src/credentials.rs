#[derive(Clone, Debug)]
pub(crate) struct Credentials {
  pub(crate) client_id: String,
  pub(crate) client_secret: String,
  pub(crate) user_agent: String,
}
