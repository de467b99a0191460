//! csv-matrix: load untrusted numeric tables into verified dense matrices.
//!
//! A [`io::TabularReader`] scans a comma-separated file once to fix its
//! shape (header field count, data row count, no blank lines) and then parses
//! it strictly into a row-major [`math::DenseMatrix`], optionally prefixed by
//! a 1-based row index column. The matrix type supports checked and
//! unchecked element access plus the usual arithmetic with shape checks.
//!
//! All failures are reported through [`error::Error`].
pub mod config;
pub mod error;
pub mod io;
pub mod math;

pub use config::ReaderConfig;
pub use error::{Error, ErrorKind, Result};
pub use io::{read_csv_matrix, TabularReader};
pub use math::{DenseMatrix, Element};
