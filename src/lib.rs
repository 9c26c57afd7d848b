//! Plain-text I/O for pairs of simplicial complexes.
//!
//! - `.sc` facet-list format: one facet per line, two sections split by a blank line.
//! - Vertex relabeling onto the contiguous range `0..k`, so that arbitrary labels
//!   can be stored as integers.
//! - simpcomp XML export.

pub mod complex;
pub mod error;
pub mod io;
pub mod relabel;

pub use complex::{facet::Facet, Complex, SimplicialComplex};
pub use error::{Result, ScError};
pub use io::sc::{
  read_sc, read_sc_from, read_sc_pair, read_sc_pair_from, write_facets, write_sc, write_sc_pair,
  write_sc_pair_to, ComplexPair,
};
pub use relabel::{unlabel, unlabel_pair, RelabelError};

pub type Dim = usize;
/// Integer vertex label of the facet-list format.
pub type VertexIdx = usize;
