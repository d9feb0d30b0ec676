use super::*;

#[allow(clippy::arbitrary_source_item_ordering)]
#[derive(Debug, Serialize)]
pub(crate) struct CommentRow {
  pub(crate) comment_id: String,
  pub(crate) author: Option<String>,
  pub(crate) score: i64,
  pub(crate) created_utc: f64,
  pub(crate) parent_id: String,
  pub(crate) link_id: String,
  pub(crate) body: String,
}

impl From<Comment> for CommentRow {
  fn from(comment: Comment) -> Self {
    Self {
      comment_id: comment.id,
      author: comment.author,
      score: comment.score,
      created_utc: comment.created_utc,
      parent_id: comment.parent_id,
      link_id: comment.link_id,
      body: comment.body,
    }
  }
}

impl Row for CommentRow {
  const HEADER: &'static [&'static str] = &[
    "comment_id",
    "author",
    "score",
    "created_utc",
    "parent_id",
    "link_id",
    "body",
  ];
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn sample_row() -> CommentRow {
    serde_json::from_value::<Comment>(json!({
      "author": "wanderer",
      "body": "Take the tram, it's cheap",
      "created_utc": 1_700_000_100.0,
      "id": "c1",
      "link_id": "t3_abc",
      "parent_id": "t3_abc",
      "score": -2
    }))
    .map(CommentRow::from)
    .unwrap()
  }

  #[test]
  fn header_matches_serialized_field_order() {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(sample_row()).unwrap();

    let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    assert_eq!(
      output.lines().next(),
      Some(CommentRow::HEADER.join(",").as_str())
    );
  }

  #[test]
  fn row_carries_comment_fields() {
    let mut buffer = Vec::new();
    table::write_to(&mut buffer, &[sample_row()]).unwrap();

    assert_eq!(
      String::from_utf8(buffer).unwrap(),
      "comment_id,author,score,created_utc,parent_id,link_id,body\n\
       c1,wanderer,-2,1700000100.0,t3_abc,t3_abc,\"Take the tram, it's cheap\"\n"
    );
  }
}
