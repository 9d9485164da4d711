//! Closed-form roots of real cubic equations c3 x^3 + c2 x^2 + c1 x + c0 = 0.

pub mod cli;
pub mod complex;
pub mod error;
pub mod format;
pub mod scan;
pub mod solver;

#[cfg(test)]
mod testing;

pub use crate::complex::Complex;
pub use crate::error::Error;
pub use crate::solver::{solve_cubic, Cubic};
