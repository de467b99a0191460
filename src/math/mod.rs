//! Dense row-major matrix type and its arithmetic.
//!
//! `DenseMatrix` keeps a single contiguous buffer indexed by `row * cols + col`
//! and offers two access tiers: unchecked indexing for inner loops and
//! bounds-checked accessors that report [`crate::error::Error::IndexOutOfRange`].
pub mod element;
pub mod matrix;
pub mod ops;

pub use element::Element;
pub use matrix::DenseMatrix;
