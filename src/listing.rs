use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
  #[serde(default)]
  pub(crate) after: Option<String>,
  #[serde(default)]
  pub(crate) children: Vec<Thing>,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Placeholders {
  pub(crate) hidden: u64,
  pub(crate) nodes: usize,
}

impl Listing {
  /// Keeps the comments already present at the top of the forest.
  ///
  /// `more` nodes are dropped without being expanded, so replies the API
  /// held back never show up here. What was dropped is reported so the
  /// caller can log it.
  pub(crate) fn top_level_comments(self) -> (Vec<Comment>, Placeholders) {
    let mut comments = Vec::with_capacity(self.data.children.len());
    let mut placeholders = Placeholders::default();

    for thing in self.data.children {
      match thing {
        Thing::Comment(comment) if comment.is_top_level() => {
          comments.push(comment);
        }
        Thing::More(more) => {
          placeholders.nodes += 1;
          placeholders.hidden += more.count;
        }
        Thing::Other(kind) => debug!(kind = %kind, "skipped unexpected child"),
        Thing::Comment(_) | Thing::Post(_) => {}
      }
    }

    (comments, placeholders)
  }
}
