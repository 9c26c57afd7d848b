//! Export to the XML format of the GAP package simpcomp.

use super::write_atomic;
use crate::{Complex, Result, ScError, VertexIdx};

use itertools::Itertools;
use std::{
  io::Write,
  path::{Path, PathBuf},
};

pub const XML_EXTENSION: &str = "xml";

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Writes `complex` as a `SimplicialComplexV2` document, facets as `[[0,1],[1,2]]`.
pub fn write_sc_xml<W, C>(mut writer: W, complex: &C) -> std::io::Result<()>
where
  W: Write,
  C: Complex<Vertex = VertexIdx>,
{
  let facets = complex
    .facets()
    .map(|facet| format!("[{}]", facet.iter().join(",")))
    .join(",");
  writeln!(writer, "{XML_PROLOG}")?;
  writeln!(writer, r#"<SimplicialComplexV2 type="SCSimplicialComplex">"#)?;
  writeln!(writer, "\t<SCFacetsEx type=\"SCArray\">[{facets}]</SCFacetsEx>")?;
  writeln!(writer, "</SimplicialComplexV2>")
}

/// Saves `complex` as simpcomp XML to `path`, or to `<canonical name>.xml`.
pub fn save_sc_xml<C>(complex: &C, path: Option<&Path>) -> Result<PathBuf>
where
  C: Complex<Vertex = VertexIdx>,
{
  let path = path.map_or_else(|| default_xml_path(complex), Path::to_path_buf);
  let mut buffer = Vec::new();
  write_sc_xml(&mut buffer, complex).map_err(ScError::io_at(&path))?;
  write_atomic(&path, &buffer)?;
  Ok(path)
}

/// `<canonical name>.xml`, relative to the working directory.
pub fn default_xml_path(complex: &impl Complex) -> PathBuf {
  PathBuf::from(format!("{}.{XML_EXTENSION}", complex.canonical_name()))
}
