//! Relabeling of vertices onto the contiguous range `0..k`.
//!
//! The facet-list format only stores integer labels. A complex with other labels
//! goes through [`unlabel`] before it is written.

use crate::{io::sc::ComplexPair, Complex, Facet, SimplicialComplex, VertexIdx};

use indexmap::IndexSet;
use thiserror::Error;

/// The vertex-to-index map of a complex fails to be a bijection onto `0..k`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelabelError {
  #[error("vertex {vertex} has no index")]
  Unmapped { vertex: String },
  #[error("vertex {vertex} has index {index}, outside of 0..{nvertices}")]
  OutOfRange {
    vertex: String,
    index: VertexIdx,
    nvertices: usize,
  },
  #[error("vertices {first} and {second} share index {index}")]
  Collision {
    index: VertexIdx,
    first: String,
    second: String,
  },
  #[error("no vertex has index {index} of 0..{nvertices}")]
  Uncovered { index: VertexIdx, nvertices: usize },
}

/// Replaces every vertex by its index under the vertex-to-index map of `sc`.
///
/// The result has vertex set `0..k` and the same facet structure as `sc`.
pub fn unlabel<C: Complex>(sc: &C) -> Result<SimplicialComplex<VertexIdx>, RelabelError> {
  let nvertices = sc.nvertices();
  let mut preimages: Vec<Option<&C::Vertex>> = vec![None; nvertices];

  let mut facets = Vec::new();
  for facet in sc.facets() {
    let facet = facet
      .iter()
      .map(|vertex| index_of(sc, vertex, &mut preimages))
      .collect::<Result<Facet<VertexIdx>, _>>()?;
    facets.push(facet);
  }

  if let Some(index) = preimages.iter().position(Option::is_none) {
    return Err(RelabelError::Uncovered { index, nvertices });
  }
  Ok(SimplicialComplex::from_facets(facets))
}

fn index_of<'a, C: Complex>(
  sc: &C,
  vertex: &'a C::Vertex,
  preimages: &mut [Option<&'a C::Vertex>],
) -> Result<VertexIdx, RelabelError> {
  let index = sc
    .vertex_index(vertex)
    .ok_or_else(|| RelabelError::Unmapped {
      vertex: format!("{vertex:?}"),
    })?;
  let nvertices = preimages.len();
  let preimage = preimages
    .get_mut(index)
    .ok_or_else(|| RelabelError::OutOfRange {
      vertex: format!("{vertex:?}"),
      index,
      nvertices,
    })?;
  match *preimage {
    None => *preimage = Some(vertex),
    Some(other) if other != vertex => {
      return Err(RelabelError::Collision {
        index,
        first: format!("{other:?}"),
        second: format!("{vertex:?}"),
      })
    }
    Some(_) => {}
  }
  Ok(index)
}

/// Relabels two complexes with one index map over the union of their vertices.
///
/// A vertex shared by `red` and `blue` gets the same index in both.
pub fn unlabel_pair<C>(red: &C, blue: &C) -> ComplexPair
where
  C: Complex,
  C::Vertex: Ord,
{
  let mut shared: IndexSet<&C::Vertex> = red.facets().chain(blue.facets()).flatten().collect();
  shared.sort_unstable();

  let relabel = |sc: &C| -> SimplicialComplex<VertexIdx> {
    sc.facets()
      .map(|facet| {
        facet
          .iter()
          // every vertex of both complexes is in `shared`
          .filter_map(|vertex| shared.get_index_of(&vertex))
          .collect::<Facet<_>>()
      })
      .collect()
  };
  ComplexPair::new(relabel(red), relabel(blue))
}
