//! Arithmetic on [`DenseMatrix`].
//!
//! Shape-dependent operations return a `Result` and fail with
//! [`Error::DimensionMismatch`]; negation and scalar products cannot fail and
//! are exposed through the `std::ops` operators.
use std::ops::{Mul, Neg};

use crate::error::{Error, Result};
use crate::math::element::Element;
use crate::math::matrix::DenseMatrix;

impl<T: Element> DenseMatrix<T> {
    fn ensure_same_shape(&self, other: &DenseMatrix<T>, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &DenseMatrix<T>, op: &'static str, f: F) -> Result<DenseMatrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.ensure_same_shape(other, op)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        DenseMatrix::new(self.nrows(), self.ncols(), data)
    }

    /// Elementwise sum.
    pub fn try_add(&self, other: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn try_sub(&self, other: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// In-place `self += other`. `self` is untouched when the shapes differ.
    pub fn try_add_assign(&mut self, other: &DenseMatrix<T>) -> Result<()> {
        self.ensure_same_shape(other, "add")?;
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// In-place `self -= other`. `self` is untouched when the shapes differ.
    pub fn try_sub_assign(&mut self, other: &DenseMatrix<T>) -> Result<()> {
        self.ensure_same_shape(other, "subtract")?;
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Matrix product `self * other`.
    ///
    /// Each element is accumulated from zero in row, column, inner-index
    /// order, so floating-point results are reproducible across runs.
    pub fn try_matmul(&self, other: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        if self.ncols() != other.nrows() {
            return Err(Error::DimensionMismatch {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (n, inner, m) = (self.nrows(), self.ncols(), other.ncols());
        let mut out = DenseMatrix::zeros(n, m)?;
        for i in 0..n {
            for j in 0..m {
                let mut acc = T::zero();
                for k in 0..inner {
                    acc = acc + self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(&self, scalar: T) -> DenseMatrix<T> {
        self.mapv(|&v| scalar * v)
    }
}

impl<T: Element> Neg for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(mut self) -> Self::Output {
        for v in self.as_mut_slice() {
            *v = -*v;
        }
        self
    }
}

impl<T: Element> Neg for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> Self::Output {
        self.mapv(|&v| -v)
    }
}

impl<T: Element> Mul<T> for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T: Element> Mul<T> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

// `scalar * matrix` has to be spelled out per primitive (orphan rule).
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<DenseMatrix<$t>> for $t {
                type Output = DenseMatrix<$t>;

                fn mul(self, m: DenseMatrix<$t>) -> Self::Output {
                    m.scale(self)
                }
            }

            impl Mul<&DenseMatrix<$t>> for $t {
                type Output = DenseMatrix<$t>;

                fn mul(self, m: &DenseMatrix<$t>) -> Self::Output {
                    m.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize);
