use super::*;

/// Body of the client credentials grant.
///
/// A rejected grant can still come back as `200 OK` with only `error` set.
#[derive(Debug, Deserialize)]
pub(crate) struct AccessToken {
  pub(crate) access_token: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) error: Option<String>,
  #[serde(default)]
  pub(crate) expires_in: u64,
}

impl AccessToken {
  pub(crate) fn into_token(self) -> Result<String> {
    match (self.access_token, self.error) {
      (Some(token), None) if !token.is_empty() => Ok(token),
      (_, Some(error)) => bail!("access token request was rejected: {error}"),
      _ => bail!("access token response did not contain a token"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(input: &str) -> AccessToken {
    serde_json::from_str(input).unwrap()
  }

  #[test]
  fn into_token_returns_bearer_token() {
    assert_eq!(
      parse(
        r#"{"access_token": "abc", "token_type": "bearer", "expires_in": 86400, "scope": "*"}"#
      )
      .into_token()
      .unwrap(),
      "abc"
    );
  }

  #[test]
  fn into_token_surfaces_rejection() {
    let error = parse(r#"{"error": "invalid_grant"}"#)
      .into_token()
      .unwrap_err();

    assert!(error.to_string().contains("invalid_grant"));
  }

  #[test]
  fn into_token_accepts_numeric_error_codes() {
    let error = parse(r#"{"message": "Unauthorized", "error": 401}"#)
      .into_token()
      .unwrap_err();

    assert!(error.to_string().contains("401"));
  }

  #[test]
  fn into_token_rejects_empty_token() {
    assert!(parse(r#"{"access_token": ""}"#).into_token().is_err());
  }
}
