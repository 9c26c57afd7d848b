pub mod sc;
pub mod xml;

use crate::{Result, ScError};

use std::{fs, io::Write as _, path::Path};
use tempfile::Builder;

/// Replaces the file at `path` by `contents`.
///
/// The bytes go to a temporary file next to `path` first, so `path` is either
/// fully written or left untouched. An existing destination keeps its permissions,
/// a new one gets the same mode as a plainly created file.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
  let dir = match path.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir,
    _ => Path::new("."),
  };

  let mut builder = Builder::new();
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt as _;
    // narrowed by the umask, like `File::create`
    builder.permissions(fs::Permissions::from_mode(0o666));
  }
  let mut file = builder.tempfile_in(dir).map_err(ScError::io_at(path))?;
  file.write_all(contents).map_err(ScError::io_at(path))?;

  if let Ok(metadata) = fs::metadata(path) {
    file
      .as_file()
      .set_permissions(metadata.permissions())
      .map_err(ScError::io_at(path))?;
  }
  file
    .persist(path)
    .map_err(|err| ScError::io_at(path)(err.error))?;
  Ok(())
}
