//! Error type shared by the codec and the relabeler.

use crate::relabel::RelabelError;

use std::{num::ParseIntError, path::Path};
use thiserror::Error;

pub type Result<T, E = ScError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ScError {
  /// The section structure of the file is malformed.
  #[error("line {line}: {reason}")]
  Format { line: usize, reason: &'static str },
  /// A facet token is not a non-negative integer.
  #[error("line {line}: `{token}` is not a non-negative integer vertex label")]
  Parse {
    line: usize,
    token: String,
    #[source]
    source: ParseIntError,
  },
  /// The source or destination could not be accessed.
  #[error("i/o failure on {target}")]
  Io {
    target: String,
    #[source]
    source: std::io::Error,
  },
  /// The vertex-to-index map of a complex is not a bijection.
  #[error(transparent)]
  Domain(#[from] RelabelError),
}

impl ScError {
  pub(crate) fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
    move |source| Self::Io {
      target: format!("`{}`", path.display()),
      source,
    }
  }

  pub(crate) fn io_stream(source: std::io::Error) -> Self {
    Self::Io {
      target: "input stream".to_string(),
      source,
    }
  }
}
