use crate::Dim;

use std::{fmt, ops::Deref};

/// A maximal face, stored as a sorted set of vertex labels.
///
/// Two facets are the same, if they are made out of the same vertices,
/// independent of the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Facet<V> {
  vertices: Vec<V>,
}

impl<V: Ord> Facet<V> {
  pub fn new(vertices: impl IntoIterator<Item = V>) -> Self {
    let mut vertices: Vec<V> = vertices.into_iter().collect();
    vertices.sort_unstable();
    vertices.dedup();
    Self { vertices }
  }

  /// Whether every vertex of `self` is also a vertex of `other`.
  pub fn is_subset_of(&self, other: &Self) -> bool {
    // both sides are sorted, so a single merge pass suffices
    let mut others = other.vertices.iter();
    self
      .vertices
      .iter()
      .all(|v| others.by_ref().any(|o| o == v))
  }
}

impl<V> Facet<V> {
  pub fn vertices(&self) -> &[V] {
    &self.vertices
  }
  pub fn nvertices(&self) -> usize {
    self.vertices.len()
  }
  pub fn dim(&self) -> Option<Dim> {
    self.vertices.len().checked_sub(1)
  }
  pub fn into_vertices(self) -> Vec<V> {
    self.vertices
  }
}

impl<V> Deref for Facet<V> {
  type Target = [V];

  fn deref(&self) -> &Self::Target {
    &self.vertices
  }
}

impl<V: Ord> FromIterator<V> for Facet<V> {
  fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
    Self::new(iter)
  }
}

impl<V: Ord, const N: usize> From<[V; N]> for Facet<V> {
  fn from(vertices: [V; N]) -> Self {
    Self::new(vertices)
  }
}

impl<V: fmt::Display> fmt::Display for Facet<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, v) in self.vertices.iter().enumerate() {
      if i > 0 {
        write!(f, " ")?;
      }
      write!(f, "{v}")?;
    }
    Ok(())
  }
}
