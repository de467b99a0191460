use std::fmt::{Debug, Display};
use std::ops::Neg;
use std::str::FromStr;

use num_traits::{FromPrimitive, Num};

/// Numeric capability required of matrix elements.
///
/// Arithmetic and a zero come from [`Num`], row ordinals are converted with
/// [`FromPrimitive`] and tokens read from a table are parsed with [`FromStr`].
/// Signed integers and floats qualify; unsigned types do not implement `Neg`.
pub trait Element:
    Num + Neg<Output = Self> + FromPrimitive + FromStr + Copy + Debug + Display
{
}

impl<T> Element for T where
    T: Num + Neg<Output = T> + FromPrimitive + FromStr + Copy + Debug + Display
{
}
