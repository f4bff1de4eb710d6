extern crate ndarray;

use ndarray::*;
use thiserror::Error;

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::params::*;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Refusing to overwrite existing matrix file {0}")]
    AlreadyExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not parse matrix file {path}: {message}")]
    Parse {
        path : PathBuf,
        message : String
    }
}

///Destination for named matrices, e.g. the diagnostics written by grid evaluation.
pub trait MatrixStore {
    ///Saves `matrix` under `name` at `destination`. When `overwrite` is false
    ///an existing matrix of that name must be left alone and reported as an error.
    fn save_matrix(&mut self, destination : &Path, name : &str,
                   matrix : ArrayView2<f64>, overwrite : bool) -> Result<(), StoreError>;
}

///A [`MatrixStore`] writing plain-text files `<destination>/<name>.txt`,
///one matrix row per line with space-separated entries.
#[derive(Clone, Debug, Default)]
pub struct TextMatrixStore;

impl TextMatrixStore {
    pub fn new() -> TextMatrixStore {
        TextMatrixStore
    }

    pub fn get_path(destination : &Path, name : &str) -> PathBuf {
        destination.join(format!("{}.{}", name, MATRIX_FILE_EXTENSION))
    }

    ///Reads back a matrix written by [`MatrixStore::save_matrix`].
    pub fn load_matrix(&self, destination : &Path, name : &str) -> Result<Array2<f64>, StoreError> {
        let path = TextMatrixStore::get_path(destination, name);
        let contents = fs::read_to_string(&path)?;

        let mut values = Vec::new();
        let mut num_rows : usize = 0;
        let mut num_cols : Option<usize> = Option::None;
        for line in contents.lines() {
            if (line.trim().is_empty()) {
                continue;
            }
            let mut row_len : usize = 0;
            for token in line.split_whitespace() {
                let value = token.parse::<f64>().map_err(|err| StoreError::Parse {
                    path : path.clone(),
                    message : format!("{} ({})", token, err)
                })?;
                values.push(value);
                row_len += 1;
            }
            if let Option::Some(expected) = num_cols {
                if (expected != row_len) {
                    return Result::Err(StoreError::Parse {
                        path : path.clone(),
                        message : format!("row {} has {} entries, expected {}", num_rows, row_len, expected)
                    });
                }
            } else {
                num_cols = Option::Some(row_len);
            }
            num_rows += 1;
        }

        let num_cols = num_cols.unwrap_or(0);
        Array::from_shape_vec((num_rows, num_cols), values).map_err(|err| StoreError::Parse {
            path,
            message : format!("{}", err)
        })
    }
}

impl MatrixStore for TextMatrixStore {
    fn save_matrix(&mut self, destination : &Path, name : &str,
                   matrix : ArrayView2<f64>, overwrite : bool) -> Result<(), StoreError> {
        fs::create_dir_all(destination)?;

        let path = TextMatrixStore::get_path(destination, name);

        let mut contents = String::new();
        for row in matrix.genrows() {
            let line = row.iter()
                          .map(|value| format!("{}", value))
                          .collect::<Vec<_>>()
                          .join(" ");
            contents.push_str(&line);
            contents.push('\n');
        }

        //create_new makes the existence check and the creation a single step
        let maybe_file = if (overwrite) {
            fs::File::create(&path)
        } else {
            fs::OpenOptions::new().write(true).create_new(true).open(&path)
        };
        let mut file = match (maybe_file) {
            Result::Ok(file) => file,
            Result::Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Result::Err(StoreError::AlreadyExists(path));
            },
            Result::Err(err) => return Result::Err(StoreError::Io(err))
        };

        if let Result::Err(err) = file.write_all(contents.as_bytes()).and_then(|_| file.flush()) {
            //Do not leave a truncated matrix behind for later loads or non-overwriting saves
            drop(file);
            if let Result::Err(remove_err) = fs::remove_file(&path) {
                warn!("Could not remove partially written {}: {}", path.display(), remove_err);
            }
            return Result::Err(StoreError::Io(err));
        }

        trace!("Saved {} x {} matrix to {}", matrix.shape()[0], matrix.shape()[1], path.display());
        Result::Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn saved_matrix_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TextMatrixStore::new();
        let matrix = random_matrix(4, 3);

        store.save_matrix(dir.path(), "inputs_grid", matrix.view(), false).unwrap();
        assert!(dir.path().join("inputs_grid.txt").exists());

        let loaded = store.load_matrix(dir.path(), "inputs_grid").unwrap();
        assert_equal_matrices_to_within(&loaded, &matrix, 0.0);
    }

    #[test]
    fn creates_missing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = TextMatrixStore::new();

        store.save_matrix(&nested, "m", array![[1.0f64, 2.0f64]].view(), false).unwrap();
        assert!(nested.join("m.txt").exists());
    }

    #[test]
    fn refuses_to_overwrite_unless_asked() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TextMatrixStore::new();
        let first = array![[1.0f64]];
        let second = array![[2.0f64]];

        store.save_matrix(dir.path(), "m", first.view(), false).unwrap();
        match (store.save_matrix(dir.path(), "m", second.view(), false)) {
            Result::Err(StoreError::AlreadyExists(_)) => {},
            other => panic!("Expected refusal, got {:?}", other)
        }
        assert_eq!(store.load_matrix(dir.path(), "m").unwrap(), first);

        store.save_matrix(dir.path(), "m", second.view(), true).unwrap();
        assert_eq!(store.load_matrix(dir.path(), "m").unwrap(), second);
    }

    #[test]
    fn existing_foreign_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        fs::write(&path, "7 8\n").unwrap();

        let mut store = TextMatrixStore::new();
        match (store.save_matrix(dir.path(), "m", array![[1.0f64]].view(), false)) {
            Result::Err(StoreError::AlreadyExists(refused)) => assert_eq!(refused, path),
            other => panic!("Expected refusal, got {:?}", other)
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "7 8\n");
    }

    #[test]
    fn destination_that_is_a_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain");
        fs::write(&not_a_dir, "").unwrap();

        let mut store = TextMatrixStore::new();
        match (store.save_matrix(&not_a_dir, "m", array![[1.0f64]].view(), false)) {
            Result::Err(StoreError::Io(_)) => {},
            other => panic!("Expected I/O error, got {:?}", other)
        }
    }

    #[test]
    fn ragged_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ragged.txt"), "1 2\n3\n").unwrap();

        let store = TextMatrixStore::new();
        match (store.load_matrix(dir.path(), "ragged")) {
            Result::Err(StoreError::Parse { .. }) => {},
            other => panic!("Expected parse error, got {:?}", other)
        }
    }
}
