//! Simplicial complexes given by their facets.
//!
//! The codec and the relabeler only talk to complexes through the [`Complex`] trait.
//! [`SimplicialComplex`] is the implementation they construct.

pub mod facet;

use facet::Facet;

use crate::{Dim, VertexIdx};

use indexmap::IndexSet;
use itertools::Itertools;
use sha2::{Digest, Sha256};
use std::{collections::HashSet, fmt::Debug, hash::Hash};

/// Read access to a simplicial complex.
pub trait Complex {
  type Vertex: Clone + Eq + Hash + Debug;

  /// The facets in whatever order the complex stores them.
  fn facets(&self) -> impl Iterator<Item = &[Self::Vertex]>;
  /// The index of `vertex` under the vertex-to-index map of the complex.
  ///
  /// Expected to be a bijection from the vertices onto `0..self.nvertices()`.
  fn vertex_index(&self, vertex: &Self::Vertex) -> Option<VertexIdx>;
  fn nvertices(&self) -> usize;
  /// Stable identifier, used as the default file name stem.
  fn canonical_name(&self) -> String;
}

/// A simplicial complex stored as its list of facets.
#[derive(Debug, Clone)]
pub struct SimplicialComplex<V> {
  facets: Vec<Facet<V>>,
  /// All vertices, sorted ascending. The index of a vertex is its position.
  vertices: IndexSet<V>,
}

impl<V: Ord + Hash + Clone> SimplicialComplex<V> {
  /// Builds the complex generated by `facets`.
  ///
  /// Empty and duplicate facets are dropped, as are faces contained in a larger facet.
  /// The surviving facets keep the order they were first given in.
  pub fn new<F>(facets: impl IntoIterator<Item = F>) -> Self
  where
    F: IntoIterator<Item = V>,
  {
    Self::from_facets(facets.into_iter().map(Facet::new))
  }

  pub fn from_facets(facets: impl IntoIterator<Item = Facet<V>>) -> Self {
    let candidates: Vec<Facet<V>> = facets
      .into_iter()
      .filter(|f| !f.is_empty())
      .unique()
      .collect();

    let maximal: Vec<bool> = candidates
      .iter()
      .map(|f| {
        !candidates
          .iter()
          .any(|g| g.nvertices() > f.nvertices() && f.is_subset_of(g))
      })
      .collect();
    let facets: Vec<Facet<V>> = candidates
      .into_iter()
      .zip(maximal)
      .filter_map(|(f, keep)| keep.then_some(f))
      .collect();

    let mut vertices: IndexSet<V> = facets
      .iter()
      .flat_map(|f| f.vertices().iter().cloned())
      .collect();
    vertices.sort_unstable();

    Self { facets, vertices }
  }
}

impl<V> SimplicialComplex<V> {
  pub fn facets(&self) -> &[Facet<V>] {
    &self.facets
  }
  pub fn facet_count(&self) -> usize {
    self.facets.len()
  }
  pub fn nvertices(&self) -> usize {
    self.vertices.len()
  }
  pub fn is_empty(&self) -> bool {
    self.facets.is_empty()
  }
  /// The vertices in ascending order.
  pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
    self.vertices.iter()
  }
  /// The vertex-to-index map: vertex `v` has index `self.vertex_to_index().get_index_of(v)`.
  pub fn vertex_to_index(&self) -> &IndexSet<V> {
    &self.vertices
  }
  /// Dimension of the largest facet, `None` for the void complex.
  pub fn dim(&self) -> Option<Dim> {
    self.facets.iter().filter_map(Facet::dim).max()
  }
}

impl<V: Ord + Hash + Clone + Debug> Complex for SimplicialComplex<V> {
  type Vertex = V;

  fn facets(&self) -> impl Iterator<Item = &[V]> {
    self.facets.iter().map(|f| f.vertices())
  }
  fn vertex_index(&self, vertex: &V) -> Option<VertexIdx> {
    self.vertices.get_index_of(vertex)
  }
  fn nvertices(&self) -> usize {
    self.vertices.len()
  }
  fn canonical_name(&self) -> String {
    let mut hasher = Sha256::new();
    for facet in self.facets.iter().sorted() {
      hasher.update(format!("{:?}\n", facet.vertices()).as_bytes());
    }
    let digest = hex::encode(hasher.finalize());
    format!(
      "sc-{}v-{}f-{}",
      self.vertices.len(),
      self.facets.len(),
      &digest[..12]
    )
  }
}

impl<V> Default for SimplicialComplex<V> {
  fn default() -> Self {
    Self {
      facets: Vec::new(),
      vertices: IndexSet::new(),
    }
  }
}

impl<V: Ord + Hash + Clone> FromIterator<Facet<V>> for SimplicialComplex<V> {
  fn from_iter<I: IntoIterator<Item = Facet<V>>>(iter: I) -> Self {
    Self::from_facets(iter)
  }
}

/// Complexes are equal if they have the same set of facets.
impl<V: Eq + Hash> PartialEq for SimplicialComplex<V> {
  fn eq(&self, other: &Self) -> bool {
    let facets: HashSet<&Facet<V>> = self.facets.iter().collect();
    self.facets.len() == other.facets.len() && other.facets.iter().all(|f| facets.contains(f))
  }
}
impl<V: Eq + Hash> Eq for SimplicialComplex<V> {}
