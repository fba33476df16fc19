/// One step of a coding path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// The sequence of keys/indices taken from the root to reach a value.
/// Carried by every encoding scope and reported in data-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodingPath(Vec<Segment>);

impl CodingPath {
    pub fn root() -> Self {
        CodingPath(Vec::new())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub(crate) fn child_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.to_string()));
        CodingPath(segments)
    }

    pub(crate) fn child_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        CodingPath(segments)
    }
}

impl core::fmt::Display for CodingPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("$")?;
        for segment in &self.0 {
            match segment {
                Segment::Key(k) => write!(f, ".{}", k)?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}
