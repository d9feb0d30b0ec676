use super::*;

/// A record written as one CSV line.
///
/// `HEADER` must list the serialized fields in declaration order.
pub(crate) trait Row: Serialize {
  const HEADER: &'static [&'static str];
}

/// Writes `rows` to `path`, replacing whatever was there.
pub(crate) fn write<R: Row>(path: &Path, rows: &[R]) -> Result {
  let file = fs::File::create(path)
    .with_context(|| format!("could not create {}", path.display()))?;

  write_to(file, rows)
    .with_context(|| format!("could not write {}", path.display()))
}

pub(crate) fn write_to<R: Row, W: io::Write>(writer: W, rows: &[R]) -> Result {
  // The header goes out by hand so that an empty table still has one.
  let mut writer = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(writer);

  writer.write_record(R::HEADER)?;

  for row in rows {
    writer.serialize(row)?;
  }

  writer.flush()?;

  Ok(())
}
