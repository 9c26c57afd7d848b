//! Files written by the codec read back to the same complexes.

use sc_io::{
  io::sc::{default_sc_path, SC_EXTENSION},
  read_sc, read_sc_pair, unlabel, unlabel_pair, write_sc, write_sc_pair, Complex, ScError,
  SimplicialComplex, VertexIdx,
};

use itertools::Itertools;
use std::{collections::HashSet, fs};
use tempfile::{NamedTempFile, TempDir};

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_test_writer()
    .try_init();
}

fn facet_set<C: Complex>(sc: &C) -> HashSet<Vec<C::Vertex>>
where
  C::Vertex: Ord,
{
  sc.facets()
    .map(|f| f.iter().cloned().sorted().collect())
    .collect()
}

/// `k` facets of `size` cyclically consecutive vertices out of `0..k`.
fn cyclic_complex(k: usize, size: usize) -> SimplicialComplex<VertexIdx> {
  SimplicialComplex::new((0..k).map(|i| (i..i + size).map(move |v| v % k)))
}

#[test]
fn scenario_file() {
  init_tracing();
  let mut file = NamedTempFile::new().unwrap();
  std::io::Write::write_all(&mut file, b"0 1\n1 2\n\n0 1 2\n").unwrap();

  let (red, blue): (SimplicialComplex<VertexIdx>, SimplicialComplex<VertexIdx>) =
    read_sc_pair(file.path()).unwrap().into();
  let expected_red: HashSet<Vec<VertexIdx>> = [vec![0, 1], vec![1, 2]].into_iter().collect();
  let expected_blue: HashSet<Vec<VertexIdx>> = [vec![0, 1, 2]].into_iter().collect();
  assert_eq!(facet_set(&red), expected_red);
  assert_eq!(facet_set(&blue), expected_blue);
}

#[test]
fn single_section_round_trip() {
  let dir = TempDir::new().unwrap();
  for k in 0..=100usize {
    for size in 1..=k {
      let sc = cyclic_complex(k, size);
      let path = dir.path().join(format!("cyclic-{k}-{size}.{SC_EXTENSION}"));
      write_sc(&sc, Some(&path)).unwrap();

      let pair = read_sc_pair(&path).unwrap();
      assert_eq!(facet_set(&pair.red), facet_set(&sc), "k={k} size={size}");
      assert!(pair.blue.is_empty());
    }
  }
}

#[test]
fn empty_complex_round_trip() {
  let dir = TempDir::new().unwrap();
  let sc = SimplicialComplex::<VertexIdx>::default();
  let path = write_sc(&sc, Some(&dir.path().join("void.sc"))).unwrap();
  assert_eq!(fs::read_to_string(&path).unwrap(), "");

  let pair = read_sc_pair(&path).unwrap();
  assert!(pair.red.is_empty());
  assert!(pair.blue.is_empty());
}

#[test]
fn pair_separation() {
  init_tracing();
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("pair.sc");
  let red = cyclic_complex(7, 3);
  let blue = SimplicialComplex::new(vec![vec![0, 5], vec![5, 6, 9], vec![2]]);

  write_sc_pair(&red, &blue, &path).unwrap();
  let pair = read_sc_pair(&path).unwrap();
  assert_eq!(pair.red, red);
  assert_eq!(pair.blue, blue);
}

#[test]
fn hand_composed_pair_file() {
  let dir = TempDir::new().unwrap();
  let red = SimplicialComplex::<VertexIdx>::new(vec![vec![0, 1, 2], vec![2, 3]]);
  let blue = SimplicialComplex::<VertexIdx>::new(vec![vec![1, 3]]);

  let red_path = write_sc(&red, Some(&dir.path().join("red.sc"))).unwrap();
  let blue_path = write_sc(&blue, Some(&dir.path().join("blue.sc"))).unwrap();
  let composed = format!(
    "{}\n{}",
    fs::read_to_string(red_path).unwrap(),
    fs::read_to_string(blue_path).unwrap()
  );
  let path = dir.path().join("composed.sc");
  fs::write(&path, composed).unwrap();

  let pair = read_sc_pair(&path).unwrap();
  assert_eq!(pair.red, red);
  assert_eq!(pair.blue, blue);
}

#[test]
fn labeled_complex_goes_through_unlabel() {
  let dir = TempDir::new().unwrap();
  let sc = SimplicialComplex::new(vec![
    vec!["apex", "left", "right"],
    vec!["left", "base"],
    vec!["right", "base"],
  ]);
  let usc = unlabel(&sc).unwrap();
  assert_eq!(
    usc.vertices().copied().collect::<Vec<_>>(),
    (0..sc.nvertices()).collect::<Vec<_>>()
  );

  let path = write_sc(&usc, Some(&dir.path().join("labeled.sc"))).unwrap();
  let sizes = |sc: &SimplicialComplex<VertexIdx>| {
    sc.facets()
      .iter()
      .map(|f| f.nvertices())
      .sorted()
      .collect::<Vec<_>>()
  };
  let read = read_sc(&path).unwrap();
  assert_eq!(read, usc);
  assert_eq!(sizes(&read), vec![2, 2, 3]);
}

#[test]
fn shared_labels_in_one_file() {
  let dir = TempDir::new().unwrap();
  let red = SimplicialComplex::new(vec![vec!['a', 'b'], vec!['b', 'c']]);
  let blue = SimplicialComplex::new(vec![vec!['c', 'd']]);
  let pair = unlabel_pair(&red, &blue);

  let path = dir.path().join("shared.sc");
  write_sc_pair(&pair.red, &pair.blue, &path).unwrap();
  assert_eq!(fs::read_to_string(&path).unwrap(), "0 1\n1 2\n\n2 3\n");
  assert_eq!(read_sc_pair(&path).unwrap(), pair);
}

#[test]
fn default_path_is_derived_from_facets() {
  let sc = cyclic_complex(5, 2);
  let name = default_sc_path(&sc);
  assert_eq!(name, default_sc_path(&cyclic_complex(5, 2)));
  assert_ne!(name, default_sc_path(&cyclic_complex(5, 3)));
  assert_eq!(name.extension().unwrap(), SC_EXTENSION);

  let dir = TempDir::new().unwrap();
  let path = write_sc(&sc, Some(&dir.path().join(&name))).unwrap();
  assert_eq!(read_sc(&path).unwrap(), sc);
}

#[test]
fn overwrite_keeps_only_new_contents() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("twice.sc");
  write_sc(&cyclic_complex(6, 4), Some(&path)).unwrap();
  write_sc(&SimplicialComplex::new(vec![vec![0usize, 1]]), Some(&path)).unwrap();
  assert_eq!(fs::read_to_string(&path).unwrap(), "0 1\n");
}

#[test]
fn unreadable_source_is_an_io_error() {
  let dir = TempDir::new().unwrap();
  let err = read_sc_pair(dir.path().join("missing.sc")).unwrap_err();
  assert!(matches!(err, ScError::Io { .. }), "{err:?}");
}

#[test]
fn unwritable_destination_is_an_io_error() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("no").join("such").join("dir.sc");
  let err = write_sc(&cyclic_complex(3, 2), Some(&path)).unwrap_err();
  assert!(matches!(err, ScError::Io { .. }), "{err:?}");
  assert!(!path.exists());
}

#[test]
fn malformed_file_is_rejected() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("bad.sc");

  fs::write(&path, "0 1\n1 a 3\n").unwrap();
  let err = read_sc_pair(&path).unwrap_err();
  assert!(matches!(err, ScError::Parse { line: 2, .. }), "{err:?}");
  assert!(err.to_string().contains("`a`"));

  fs::write(&path, "0 1\n\n1 2\n\n").unwrap();
  let err = read_sc_pair(&path).unwrap_err();
  assert!(matches!(err, ScError::Format { line: 4, .. }), "{err:?}");
}
