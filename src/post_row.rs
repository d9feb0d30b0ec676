use super::*;

#[allow(clippy::arbitrary_source_item_ordering)]
#[derive(Debug, Serialize)]
pub(crate) struct PostRow {
  pub(crate) post_id: String,
  pub(crate) title: String,
  pub(crate) author: Option<String>,
  pub(crate) score: i64,
  pub(crate) num_comments: u64,
  pub(crate) created_utc: f64,
  pub(crate) subreddit: String,
  pub(crate) post_url: String,
  pub(crate) selftext: String,
}

impl From<Post> for PostRow {
  fn from(post: Post) -> Self {
    Self {
      post_id: post.id,
      title: post.title,
      author: post.author,
      score: post.score,
      num_comments: post.num_comments,
      created_utc: post.created_utc,
      subreddit: post.subreddit,
      post_url: post.url,
      selftext: post.selftext,
    }
  }
}

impl Row for PostRow {
  const HEADER: &'static [&'static str] = &[
    "post_id",
    "title",
    "author",
    "score",
    "num_comments",
    "created_utc",
    "subreddit",
    "post_url",
    "selftext",
  ];
}

#[cfg(test)]
mod tests {
  use {super::*, serde_json::json};

  fn sample_row() -> PostRow {
    serde_json::from_value::<Post>(json!({
      "author": "[deleted]",
      "created_utc": 1_700_000_000.0,
      "id": "abc",
      "num_comments": 5,
      "score": 17,
      "selftext": "Any tips?\nThanks & cheers",
      "subreddit": "travel",
      "title": "Lisbon & Porto in a week",
      "url": "https://www.reddit.com/r/travel/comments/abc/"
    }))
    .map(PostRow::from)
    .unwrap()
  }

  #[test]
  fn header_matches_serialized_field_order() {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(sample_row()).unwrap();

    let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    assert_eq!(output.lines().next(), Some(PostRow::HEADER.join(",").as_str()));
  }

  #[test]
  fn row_carries_post_fields() {
    let mut buffer = Vec::new();
    table::write_to(&mut buffer, &[sample_row()]).unwrap();

    assert_eq!(
      String::from_utf8(buffer).unwrap(),
      "post_id,title,author,score,num_comments,created_utc,subreddit,post_url,selftext\n\
       abc,Lisbon & Porto in a week,,17,5,1700000000.0,travel,\
       https://www.reddit.com/r/travel/comments/abc/,\"Any tips?\nThanks & cheers\"\n"
    );
  }
}
