//! The `.sc` facet-list format.
//!
//! One facet per line, vertices as whitespace separated non-negative integers.
//! A paired file holds two complexes, separated by a single empty line:
//!
//! ```text
//! 0 1
//! 1 2
//!
//! 0 1 2
//! ```

use super::write_atomic;
use crate::{Complex, Facet, Result, ScError, SimplicialComplex, VertexIdx};

use itertools::Itertools;
use std::{
  fs,
  io::{BufRead, Write},
  path::{Path, PathBuf},
};

pub const SC_EXTENSION: &str = "sc";

/// The two complexes of a paired file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexPair {
  pub red: SimplicialComplex<VertexIdx>,
  pub blue: SimplicialComplex<VertexIdx>,
}
impl ComplexPair {
  pub fn new(red: SimplicialComplex<VertexIdx>, blue: SimplicialComplex<VertexIdx>) -> Self {
    Self { red, blue }
  }

  fn from_sections(sections: Vec<Vec<Facet<VertexIdx>>>) -> Self {
    let mut sections = sections.into_iter().map(SimplicialComplex::from_facets);
    let red = sections.next().unwrap_or_default();
    let blue = sections.next().unwrap_or_default();
    Self { red, blue }
  }
}
impl From<ComplexPair> for (SimplicialComplex<VertexIdx>, SimplicialComplex<VertexIdx>) {
  fn from(pair: ComplexPair) -> Self {
    (pair.red, pair.blue)
  }
}

/// Reads the pair of complexes stored in the file at `path`.
pub fn read_sc_pair(path: impl AsRef<Path>) -> Result<ComplexPair> {
  let path = path.as_ref();
  let content = fs::read_to_string(path).map_err(ScError::io_at(path))?;
  let sections = parse_sections(content.lines().map(Ok), PAIR)?;
  let pair = ComplexPair::from_sections(sections);
  tracing::debug!("read complex pair from {}", path.display());
  log_summary(&pair.red, "red");
  log_summary(&pair.blue, "blue");
  Ok(pair)
}

/// Reads a pair of complexes from a line stream, e.g. standard input.
pub fn read_sc_pair_from<R: BufRead>(reader: R) -> Result<ComplexPair> {
  let lines = reader.lines().map(|l| l.map_err(ScError::io_stream));
  let pair = ComplexPair::from_sections(parse_sections(lines, PAIR)?);
  log_summary(&pair.red, "red");
  log_summary(&pair.blue, "blue");
  Ok(pair)
}

/// Reads a single complex, a file without any section delimiter.
pub fn read_sc(path: impl AsRef<Path>) -> Result<SimplicialComplex<VertexIdx>> {
  let path = path.as_ref();
  let content = fs::read_to_string(path).map_err(ScError::io_at(path))?;
  let sc = single_complex(parse_sections(content.lines().map(Ok), SINGLE)?);
  log_summary(&sc, &path.display().to_string());
  Ok(sc)
}

pub fn read_sc_from<R: BufRead>(reader: R) -> Result<SimplicialComplex<VertexIdx>> {
  let lines = reader.lines().map(|l| l.map_err(ScError::io_stream));
  let sc = single_complex(parse_sections(lines, SINGLE)?);
  log_summary(&sc, "complex");
  Ok(sc)
}

/// Writes the facets of `complex` to `path`, or to [`default_sc_path`] if none is given.
///
/// Returns the path that was written. The destination is replaced atomically.
pub fn write_sc<C>(complex: &C, path: Option<&Path>) -> Result<PathBuf>
where
  C: Complex<Vertex = VertexIdx>,
{
  let path = path.map_or_else(|| default_sc_path(complex), Path::to_path_buf);
  let mut buffer = Vec::new();
  write_facets(&mut buffer, complex).map_err(ScError::io_at(&path))?;
  write_atomic(&path, &buffer)?;
  tracing::debug!("wrote {}", path.display());
  Ok(path)
}

/// Writes `red` and `blue` as one paired file to `path`.
pub fn write_sc_pair<C>(red: &C, blue: &C, path: impl AsRef<Path>) -> Result<()>
where
  C: Complex<Vertex = VertexIdx>,
{
  let path = path.as_ref();
  let mut buffer = Vec::new();
  write_sc_pair_to(&mut buffer, red, blue).map_err(ScError::io_at(path))?;
  write_atomic(path, &buffer)?;
  tracing::debug!("wrote complex pair to {}", path.display());
  Ok(())
}

/// `<canonical name>.sc`, relative to the working directory.
pub fn default_sc_path(complex: &impl Complex) -> PathBuf {
  PathBuf::from(format!("{}.{SC_EXTENSION}", complex.canonical_name()))
}

/// Writes one line per facet, in the order the complex yields them.
///
/// Empty facets are skipped, since an empty line is the section delimiter.
pub fn write_facets<W, C>(mut writer: W, complex: &C) -> std::io::Result<()>
where
  W: Write,
  C: Complex<Vertex = VertexIdx>,
{
  for facet in complex.facets().filter(|f| !f.is_empty()) {
    writeln!(writer, "{}", facet.iter().join(" "))?;
  }
  Ok(())
}

pub fn write_sc_pair_to<W, C>(mut writer: W, red: &C, blue: &C) -> std::io::Result<()>
where
  W: Write,
  C: Complex<Vertex = VertexIdx>,
{
  write_facets(&mut writer, red)?;
  writeln!(writer)?;
  write_facets(&mut writer, blue)
}

const PAIR: usize = 2;
const SINGLE: usize = 1;

/// Splits numbered facet lines into at most `max_sections` sections.
fn parse_sections<S: AsRef<str>>(
  lines: impl IntoIterator<Item = Result<S>>,
  max_sections: usize,
) -> Result<Vec<Vec<Facet<VertexIdx>>>> {
  let mut sections = vec![Vec::new()];
  for (iline, line) in lines.into_iter().enumerate() {
    let line = line?;
    let line = line.as_ref();
    let nline = iline + 1;

    if line.is_empty() {
      if sections.len() == max_sections {
        return Err(ScError::Format {
          line: nline,
          reason: if max_sections == SINGLE {
            "section delimiter in a single complex file"
          } else {
            "second section delimiter, a paired file holds exactly two sections"
          },
        });
      }
      sections.push(Vec::new());
      continue;
    }

    let facet = parse_facet(line, nline)?;
    if facet.is_empty() {
      tracing::warn!("line {nline} contains only whitespace, ignoring empty facet");
    }
    // `sections` starts with one element and only grows
    if let Some(section) = sections.last_mut() {
      section.push(facet);
    }
  }
  Ok(sections)
}

fn parse_facet(line: &str, nline: usize) -> Result<Facet<VertexIdx>> {
  line
    .split_whitespace()
    .map(|token| {
      token.parse::<VertexIdx>().map_err(|source| ScError::Parse {
        line: nline,
        token: token.to_string(),
        source,
      })
    })
    .collect()
}

fn single_complex(sections: Vec<Vec<Facet<VertexIdx>>>) -> SimplicialComplex<VertexIdx> {
  sections.into_iter().flatten().collect()
}

fn log_summary(sc: &SimplicialComplex<VertexIdx>, name: &str) {
  tracing::debug!(
    "{name} contains {} vertices and {} facets",
    sc.nvertices(),
    sc.facet_count()
  );
}
