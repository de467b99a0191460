use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::error::{Error, Result};

/// Dense matrix stored in row-major order: element `(r, c)` lives at
/// `data[r * cols + c]`. Both dimensions are strictly positive and the buffer
/// always holds exactly `rows * cols` elements.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> DenseMatrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::SizeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Unchecked read. Only the flat offset is validated, so a column past
    /// the end silently lands in the next row; an offset past the buffer
    /// panics.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[self.offset(row, col)]
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        *self.get_mut(row, col) = value;
    }

    /// Bounds-checked read.
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_bounds(row, col)?;
        Ok(&self.data[self.offset(row, col)])
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_bounds(row, col)?;
        let offset = self.offset(row, col);
        Ok(&mut self.data[offset])
    }

    /// Bounds-checked write.
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.at_mut(row, col)? = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn mapv<U, F>(&self, mut f: F) -> DenseMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        DenseMatrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn transpose(&self) -> DenseMatrix<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        DenseMatrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> DenseMatrix<T>
where
    T: Zero + Clone,
{
    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(Error::SizeMismatch { rows, cols, len: 0 })?;
        Ok(Self {
            data: vec![T::zero(); len],
            rows,
            cols,
        })
    }

    /// Square matrix with `diagonal` on its main diagonal and zeros elsewhere.
    /// The side length is inferred from `diagonal.len()`.
    pub fn from_diagonal(diagonal: &[T]) -> Result<Self> {
        let n = diagonal.len();
        let mut m = Self::zeros(n, n)?;
        for (i, value) in diagonal.iter().enumerate() {
            m[(i, i)] = value.clone();
        }
        Ok(m)
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.get(index.0, index.1)
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        self.get_mut(index.0, index.1)
    }
}

/// One line per row: `( ` followed by each element and a tab, closed by `)`.
impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "( ")?;
            for value in self.row_slice(row) {
                write!(f, "{}\t", value)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
