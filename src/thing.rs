use super::*;

#[derive(Debug, Deserialize)]
#[serde(try_from = "RawThing")]
pub(crate) enum Thing {
  Comment(Comment),
  More(More),
  Other(String),
  Post(Post),
}

#[derive(Deserialize)]
struct RawThing {
  #[serde(default)]
  data: Value,
  kind: String,
}

impl Thing {
  pub(crate) fn into_post(self) -> Option<Post> {
    match self {
      Self::Post(post) => Some(post),
      _ => None,
    }
  }
}

impl TryFrom<RawThing> for Thing {
  type Error = serde_json::Error;

  fn try_from(raw: RawThing) -> Result<Self, Self::Error> {
    Ok(match raw.kind.as_str() {
      "more" => Self::More(serde_json::from_value(raw.data)?),
      "t1" => Self::Comment(serde_json::from_value(raw.data)?),
      "t3" => Self::Post(serde_json::from_value(raw.data)?),
      _ => Self::Other(raw.kind),
    })
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  #[test]
  fn dispatches_on_kind() {
    let thing = serde_json::from_value::<Thing>(json!({
      "kind": "more",
      "data": { "count": 12, "children": ["a", "b"] }
    }))
    .unwrap();

    let Thing::More(more) = thing else {
      panic!("expected a placeholder");
    };

    assert_eq!(more.count, 12);
  }

  #[test]
  fn unknown_kinds_are_kept_as_other() {
    let thing = serde_json::from_value::<Thing>(json!({
      "kind": "t5",
      "data": { "display_name": "travel" }
    }))
    .unwrap();

    assert!(matches!(thing, Thing::Other(kind) if kind == "t5"));
  }

  #[test]
  fn malformed_payload_for_known_kind_is_an_error() {
    assert!(
      serde_json::from_value::<Thing>(json!({
        "kind": "t1",
        "data": { "id": "c1" }
      }))
      .is_err()
    );
  }
}
