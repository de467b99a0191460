//! Two-pass reader for numeric comma-separated tables.
//!
//! Opening a [`TabularReader`] performs the structural scan: the header fixes
//! the column count, every data line is counted and blank lines are
//! rejected. [`TabularReader::read_data`] then runs an independent second
//! pass that parses each row and assembles a [`DenseMatrix`].
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::io::fields::{parse_field, split_fields};
use crate::io::progress::{LogProgress, NoProgress, ProgressSink, ProgressTick};
use crate::math::{DenseMatrix, Element};

/// Reader bound to one source file whose shape was fixed when it was opened.
#[derive(Debug, Clone)]
pub struct TabularReader<T> {
    path: PathBuf,
    config: ReaderConfig,
    header: String,
    cols: usize,
    rows: usize,
    row_numbers: Vec<T>,
    elements: Vec<T>,
}

fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|source| Error::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file).lines())
}

fn input_failure(path: &Path, source: io::Error) -> Error {
    Error::InputFailure {
        path: path.to_path_buf(),
        source,
    }
}

impl<T: Element> TabularReader<T> {
    /// Open `path` with the default [`ReaderConfig`] and scan its structure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    /// Open `path` and scan its structure.
    ///
    /// The first line is kept verbatim as the header and its field count
    /// becomes the column count. Every following line is counted as a data
    /// row; a line with no content fails with [`Error::EmptyLine`].
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut lines = open_lines(&path)?;

        let header = match lines.next() {
            Some(line) => line.map_err(|e| input_failure(&path, e))?,
            None => String::new(),
        };
        let cols = split_fields(&header).count();

        let mut rows = 0;
        for line in lines {
            let line = line.map_err(|e| input_failure(&path, e))?;
            if line.is_empty() {
                log::debug!("Data row {} of '{}' is empty", rows + 1, path.display());
                return Err(Error::EmptyLine { row: rows + 1 });
            }
            rows += 1;
        }

        log::debug!(
            "Scanned '{}': {} columns, {} data rows",
            path.display(),
            cols,
            rows
        );

        Ok(Self {
            path,
            config,
            header,
            cols,
            rows,
            row_numbers: Vec::new(),
            elements: Vec::new(),
        })
    }

    /// Parse one data line into exactly `cols` values.
    ///
    /// `row` is the 1-based data row used in error reports; reported columns
    /// are 1-based as well. Fails as soon as a field past the declared
    /// column count is seen, without reading the rest of the line.
    pub fn parse_row(&self, line: &str, row: usize) -> Result<Vec<T>> {
        let mut values = Vec::with_capacity(self.cols);
        for (idx, token) in split_fields(line).enumerate() {
            let col = idx + 1;
            if col > self.cols {
                return Err(Error::TooManyColumns {
                    row,
                    expected: self.cols,
                });
            }
            let value = parse_field::<T>(token).ok_or_else(|| Error::NumberInvalid {
                row,
                col,
                value: token.to_string(),
            })?;
            values.push(value);
        }
        if values.len() < self.cols {
            return Err(Error::TooFewColumns {
                row,
                expected: self.cols,
                found: values.len(),
            });
        }
        Ok(values)
    }

    /// Read the data region into a `rows x cols` matrix, or
    /// `rows x (cols + 1)` with a leading 1-based row index column.
    ///
    /// Progress goes to the `log` facade when `log_progress` is set in the
    /// reader's configuration.
    pub fn read_data(&mut self, with_row_index: bool) -> Result<DenseMatrix<T>> {
        if self.config.log_progress {
            let description = format!("Reading '{}'", self.path.display());
            self.read_data_with_progress(with_row_index, LogProgress::new(&description))
        } else {
            self.read_data_with_progress(with_row_index, NoProgress)
        }
    }

    /// Same as [`read_data`](Self::read_data), reporting progress to `sink`.
    ///
    /// The sink is ticked every [`ReaderConfig::progress_interval`] rows and
    /// once more after the last row. A failed read leaves the cached
    /// [`elements`](Self::elements) and [`row_numbers`](Self::row_numbers)
    /// of the previous successful read untouched.
    pub fn read_data_with_progress<S: ProgressSink>(
        &mut self,
        with_row_index: bool,
        mut sink: S,
    ) -> Result<DenseMatrix<T>> {
        let mut lines = open_lines(&self.path)?;
        if let Some(header) = lines.next() {
            header.map_err(|e| input_failure(&self.path, e))?;
        }

        let width = if with_row_index {
            self.cols + 1
        } else {
            self.cols
        };
        let interval = self.config.progress_interval(self.rows);

        let mut row_numbers = Vec::new();
        let mut elements = Vec::with_capacity(self.rows.saturating_mul(width));

        log::debug!(
            "Started reading {} rows from '{}'",
            self.rows,
            self.path.display()
        );

        let mut rows_done = 0;
        for line in lines.by_ref().take(self.rows) {
            let line = line.map_err(|e| input_failure(&self.path, e))?;
            let row = rows_done + 1;
            let values = self.parse_row(&line, row)?;
            if with_row_index {
                let ordinal = T::from_usize(row).ok_or_else(|| Error::NumberInvalid {
                    row,
                    col: 0,
                    value: row.to_string(),
                })?;
                row_numbers.push(ordinal);
                elements.push(ordinal);
            }
            elements.extend(values);
            rows_done = row;

            if rows_done % interval == 0 {
                sink.tick(ProgressTick {
                    rows_done,
                    total_rows: self.rows,
                });
            }
        }

        if rows_done < self.rows {
            log::warn!(
                "'{}' has {} data rows, {} were scanned when it was opened",
                self.path.display(),
                rows_done,
                self.rows
            );
        } else if let Some(extra) = lines.next() {
            extra.map_err(|e| input_failure(&self.path, e))?;
            return Err(input_failure(
                &self.path,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "source holds more than the {} data rows scanned when it was opened",
                        self.rows
                    ),
                ),
            ));
        }

        sink.tick(ProgressTick {
            rows_done,
            total_rows: self.rows,
        });

        let matrix = DenseMatrix::new(self.rows, width, elements)?;
        self.elements = matrix.to_vec();
        self.row_numbers = row_numbers;
        Ok(matrix)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Number of columns declared by the header.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of data rows found by the structural scan.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The raw header line, without its terminator.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Header split into column names.
    pub fn header_fields(&self) -> Vec<&str> {
        split_fields(&self.header).collect()
    }

    /// Row ordinals from the most recent successful read with row indices
    /// enabled; empty otherwise.
    pub fn row_numbers(&self) -> &[T] {
        &self.row_numbers
    }

    /// Flat row-major buffer from the most recent successful read.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }
}

/// Open `path` and read it in one go.
pub fn read_csv_matrix<T: Element, P: AsRef<Path>>(
    path: P,
    with_row_index: bool,
) -> Result<DenseMatrix<T>> {
    TabularReader::<T>::open(path)?.read_data(with_row_index)
}
